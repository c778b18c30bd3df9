use anyhow::{anyhow, Context, Result};
use catalog::{format_duration, format_votes, Facet, MovieRecord};
use clap::{Parser, Subcommand};
use colored::Colorize;
use query::{QueryEngine, QueryState, SortKey, Tab};
use rand::Rng;
use showcase::{CatalogSource, ShowcaseConfig, Storefront, DEFAULT_HERO_INTERVAL, LOCATIONS};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Marquee - browse what's playing
#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Browse, filter and sort the movie catalog", long_about = None)]
struct Cli {
    /// Path to a JSON catalog file (defaults to the built-in demo catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List movies matching a search, filters and sort order
    List {
        /// Tab to browse: now or soon
        #[arg(long, default_value = "now")]
        tab: Tab,

        /// Case-insensitive text matched against title, language and genres
        #[arg(long)]
        search: Option<String>,

        /// Language to include (repeatable)
        #[arg(long = "lang")]
        languages: Vec<String>,

        /// Genre to include (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Format to include (repeatable)
        #[arg(long = "format")]
        formats: Vec<String>,

        /// Sort order: popularity, rating, duration or az
        #[arg(long, default_value = "popularity")]
        sort: SortKey,

        /// City to show listings for (see `locations`)
        #[arg(long)]
        city: Option<String>,
    },

    /// Show the filter options offered by the catalog
    Facets,

    /// List the selectable cities
    Locations,

    /// Show full details for one movie
    Show {
        /// Movie id, e.g. border-2
        #[arg(long)]
        id: String,
    },

    /// Run the hero carousel for a few slides
    Hero {
        /// Number of slide changes to watch
        #[arg(long, default_value = "3")]
        ticks: usize,

        /// Milliseconds each slide stays up
        #[arg(long, default_value_t = DEFAULT_HERO_INTERVAL.as_millis() as u64)]
        interval_ms: u64,
    },

    /// Evaluate random queries to measure engine latency
    Benchmark {
        /// Number of queries to evaluate
        #[arg(long, default_value = "1000")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ShowcaseConfig::default();
    if let Some(path) = cli.catalog {
        config.catalog = CatalogSource::File(path);
    }

    match cli.command {
        Commands::List {
            tab,
            search,
            languages,
            genres,
            formats,
            sort,
            city,
        } => {
            let mut query = QueryState::new(tab)
                .with_search(search.unwrap_or_default())
                .with_sort(sort);
            for (facet, values) in [
                (Facet::Language, languages),
                (Facet::Genre, genres),
                (Facet::Format, formats),
            ] {
                for value in values {
                    if !query.selected(facet).contains(&value) {
                        query = query.toggled(facet, &value);
                    }
                }
            }
            handle_list(&config, query, city.as_deref())?
        }
        Commands::Facets => handle_facets(&config)?,
        Commands::Locations => handle_locations(),
        Commands::Show { id } => handle_show(&config, &id)?,
        Commands::Hero { ticks, interval_ms } => {
            config.hero_interval = Duration::from_millis(interval_ms.max(1));
            handle_hero(&config, ticks).await?
        }
        Commands::Benchmark { requests } => handle_benchmark(&config, requests).await?,
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(config: &ShowcaseConfig, query: QueryState, city: Option<&str>) -> Result<()> {
    let mut store = Storefront::load(config)?;
    if let Some(city) = city {
        store.set_location(city)?;
    }
    store.set_query(query);
    let view = store.view();

    println!(
        "{}",
        format!(
            "{} ({}, sorted by {})",
            view.header(),
            store.query().tab,
            store.query().sort_key
        )
        .bold()
        .blue()
    );

    if view.movies.is_empty() {
        println!("No movies match these filters. Try clearing some of them.");
        return Ok(());
    }

    for (rank, movie) in view.movies.iter().enumerate() {
        print_movie_line(rank + 1, movie);
    }
    Ok(())
}

/// Handle the 'facets' command
fn handle_facets(config: &ShowcaseConfig) -> Result<()> {
    let store = Storefront::load(config)?;
    let facets = store.catalog().facets();

    for facet in Facet::ALL {
        println!("{}", format!("{}:", facet).bold().blue());
        for option in facets.options(facet) {
            println!("{}{}", "• ".green(), option);
        }
    }
    Ok(())
}

/// Handle the 'locations' command
fn handle_locations() {
    println!("{}", "Cities:".bold().blue());
    for location in LOCATIONS {
        println!("{}{} ({})", "• ".green(), location.city, location.state);
    }
}

/// Handle the 'show' command
fn handle_show(config: &ShowcaseConfig, id: &str) -> Result<()> {
    let store = Storefront::load(config)?;
    let movie = store
        .open_movie(id)
        .ok_or_else(|| anyhow!("Movie '{}' not found", id))?;

    println!("{}", movie.title.bold().blue());
    println!(
        "{}{} · {} · {}",
        "• ".green(),
        movie.certification,
        movie.language,
        movie.status
    );
    println!("{}Genres: {}", "• ".green(), movie.genres.join(", "));
    println!("{}Duration: {}", "• ".green(), format_duration(movie.duration_minutes));
    println!(
        "{}Rating: {:.1}/5 ({} votes)",
        "• ".cyan(),
        movie.rating,
        format_votes(movie.vote_count)
    );
    println!("{}Formats: {}", "• ".cyan(), movie.formats.join(", "));
    if !movie.synopsis.is_empty() {
        println!("\n{}", movie.synopsis);
    }
    if !movie.cast.is_empty() {
        println!("\nCast: {}", movie.cast.join(", "));
    }
    Ok(())
}

/// Handle the 'hero' command
async fn handle_hero(config: &ShowcaseConfig, ticks: usize) -> Result<()> {
    let store = Storefront::load(config)?;
    let Some(first) = store.hero() else {
        println!("The catalog is empty; nothing to feature.");
        return Ok(());
    };
    print_hero(0, first);

    let mut ticker = store.start_ticker(config);
    let mut updates = ticker.subscribe();
    for _ in 0..ticks {
        updates
            .changed()
            .await
            .context("Carousel ticker stopped unexpectedly")?;
        let index = *updates.borrow_and_update();
        if let Some(movie) = store.hero() {
            print_hero(index, movie);
        }
    }
    ticker.stop();
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(config: &ShowcaseConfig, requests: usize) -> Result<()> {
    let store = Storefront::load(config)?;
    let engine = Arc::new(QueryEngine::new(store.catalog().clone()));
    let queries = random_queries(&engine, requests);
    tracing::info!("Running benchmark with {} queries", queries.len());

    // Evaluate on the blocking pool; each task reports its own latency
    let started = Instant::now();
    let mut handles = Vec::with_capacity(queries.len());
    for query in queries {
        let engine = engine.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let start = Instant::now();
            let count = engine.evaluate(&query).count();
            (start.elapsed(), count)
        }));
    }

    let mut timings = Vec::with_capacity(handles.len());
    let mut matched = 0;
    for handle in handles {
        let (elapsed, count) = handle.await.context("Benchmark task failed")?;
        timings.push(elapsed);
        matched += count;
    }
    let wall_time = started.elapsed();

    if timings.is_empty() {
        println!("No queries evaluated.");
        return Ok(());
    }

    timings.sort();
    let total: Duration = timings.iter().sum();
    let percentile = |p: f64| timings[((timings.len() - 1) as f64 * p) as usize];

    println!("{}", "Benchmark results:".bold().blue());
    println!("Queries: {} ({} movies matched in total)", timings.len(), matched);
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", total / timings.len() as u32);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!(
        "Throughput: {:.2} queries/second",
        timings.len() as f64 / wall_time.as_secs_f64()
    );
    Ok(())
}

/// Build random but valid queries from the catalog's own facet options
fn random_queries(engine: &QueryEngine, count: usize) -> Vec<QueryState> {
    let mut rng = rand::rng();
    let facets = engine.facets();
    let sorts = [
        SortKey::Popularity,
        SortKey::Rating,
        SortKey::Duration,
        SortKey::Alphabetical,
    ];
    let searches = ["", "", "a", "in", "dr"];

    (0..count)
        .map(|_| {
            let tab = if rng.random_bool(0.8) {
                Tab::NowShowing
            } else {
                Tab::ComingSoon
            };
            let mut query = QueryState::new(tab)
                .with_sort(sorts[rng.random_range(0..sorts.len())])
                .with_search(searches[rng.random_range(0..searches.len())]);
            for facet in Facet::ALL {
                let options = facets.options(facet);
                if !options.is_empty() && rng.random_bool(0.3) {
                    query = query.toggled(facet, &options[rng.random_range(0..options.len())]);
                }
            }
            query
        })
        .collect()
}

/// One grid row
fn print_movie_line(rank: usize, movie: &MovieRecord) {
    println!(
        "{}. {} [{}] {} · {} · {} · {} {:.1} ({})",
        rank.to_string().green(),
        movie.title.bold(),
        movie.certification,
        movie.language,
        movie.genres.join(", "),
        format_duration(movie.duration_minutes),
        "★".yellow(),
        movie.rating,
        format_votes(movie.vote_count)
    );
}

/// One hero slide
fn print_hero(index: usize, movie: &MovieRecord) {
    println!(
        "{} {} - {} · {} · {}",
        format!("[{}]", index + 1).cyan(),
        movie.title.bold(),
        movie.status,
        movie.formats.join(" / "),
        movie.synopsis
    );
}
