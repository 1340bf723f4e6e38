use anyhow::{anyhow, bail, Result};
use catalog::{geography, sample_catalog, Course, CourseId, Location, LocationKind};
use clap::{Parser, Subcommand};
use colored::Colorize;
use filtering::{filter_catalog, Facet, FilterState, PriceRange};

/// Course Scout - faceted course catalog browser
#[derive(Parser)]
#[command(name = "course-scout")]
#[command(about = "Browse the course catalog with faceted filters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog, narrowed by any combination of facets
    Browse {
        /// Delivery kind: 'online' or 'local'
        #[arg(long)]
        course_type: Option<LocationKind>,

        /// Country name (restricts local courses only)
        #[arg(long)]
        country: Option<String>,

        /// City name (restricts local courses only)
        #[arg(long)]
        city: Option<String>,

        /// Inclusive minimum rating, e.g. 4.5
        #[arg(long)]
        min_rating: Option<f32>,

        /// Inclusive price range as MIN-MAX, e.g. 100-500
        #[arg(long)]
        price_range: Option<PriceRange>,

        /// Exact category name, e.g. Technology
        #[arg(long)]
        category: Option<String>,

        /// Print the result set as JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// List the known countries, or the cities of one country
    Locations {
        /// Country to list cities for
        #[arg(long)]
        country: Option<String>,
    },

    /// Show one course by id
    Show {
        /// Course id to display
        #[arg(long)]
        id: CourseId,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let catalog = sample_catalog();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Browse {
            course_type,
            country,
            city,
            min_rating,
            price_range,
            category,
            json,
        } => handle_browse(
            &catalog,
            course_type,
            country,
            city,
            min_rating,
            price_range,
            category,
            json,
        ),
        Commands::Locations { country } => handle_locations(country),
        Commands::Show { id } => handle_show(&catalog, id),
    }
}

/// Handle the 'browse' command
#[allow(clippy::too_many_arguments)]
fn handle_browse(
    catalog: &[Course],
    course_type: Option<LocationKind>,
    country: Option<String>,
    city: Option<String>,
    min_rating: Option<f32>,
    price_range: Option<PriceRange>,
    category: Option<String>,
    json: bool,
) -> Result<()> {
    // Facets are applied parent before child so the cascading reset never
    // wipes a flag the user actually passed
    let mut state = FilterState::new();
    if course_type.is_some() {
        state = state.set(Facet::CourseType(course_type));
    }
    if country.is_some() {
        state = state.set(Facet::Country(country));
    }
    if city.is_some() {
        state = state.set(Facet::City(city));
    }
    state = state
        .set(Facet::PriceRange(price_range))
        .set(Facet::MinRating(min_rating))
        .set(Facet::Category(category));

    tracing::debug!("Browsing with state: {:?}", state);
    let visible = filter_catalog(catalog, &state);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Courses ({} of {}):", visible.len(), catalog.len())
            .bold()
            .blue()
    );
    for (rank, course) in visible.iter().enumerate() {
        print_course_line(rank + 1, course);
    }
    if visible.is_empty() {
        println!("  (no courses match the selected filters)");
    }
    Ok(())
}

/// Handle the 'locations' command
fn handle_locations(country: Option<String>) -> Result<()> {
    match country {
        None => {
            println!("{}", "Countries:".bold().blue());
            for country in geography::COUNTRIES {
                println!(
                    "{}{} ({} cities)",
                    "• ".green(),
                    country,
                    geography::cities_in(country).len()
                );
            }
        }
        Some(country) => {
            let cities = geography::cities_in(&country);
            if cities.is_empty() {
                bail!("Unknown country '{country}'");
            }
            println!("{}", format!("Cities in {country}:").bold().blue());
            for city in cities {
                println!("{}{}", "• ".green(), city);
            }
        }
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(catalog: &[Course], id: CourseId) -> Result<()> {
    let course = catalog
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| anyhow!("Course {} not found", id))?;

    println!("{}", format!("Course {}", course.id).bold().blue());
    println!("{}Title: {}", "• ".green(), course.title);
    println!("{}Provider: {}", "• ".green(), course.provider);
    println!("{}Category: {}", "• ".green(), course.category);
    println!("{}Price: ${}", "• ".cyan(), course.price);
    println!("{}Rating: {:.1}", "• ".cyan(), course.rating);
    match &course.location {
        Location::Online => println!("{}Location: online", "• ".cyan()),
        Location::Local { country, city } => {
            println!("{}Location: {}, {}", "• ".cyan(), city, country);
        }
    }
    Ok(())
}

/// Format one course as a single browse line
fn print_course_line(rank: usize, course: &Course) {
    let place = match &course.location {
        Location::Online => "online".to_string(),
        Location::Local { country, city } => format!("{city}, {country}"),
    };
    println!(
        "{}. {} — {} [{}] {:.1}★ ${} ({})",
        rank.to_string().green(),
        course.title,
        course.provider,
        course.category,
        course.rating,
        course.price,
        place
    );
}
