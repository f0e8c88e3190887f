use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand};
use sunrise_base::{
    ALL_ZENITHS, CalendarDate, GeoCoordinate, MoonPhaseConfig, MoonPhaseMethod, MoonPhaseResult,
    SolarEvent, SolarEventResult, SolarTrace, Zenith, classify, compute_all_events,
    compute_moon_phase, solve_event, trace_solar_event,
};
use sunrise_time::{ClockTime, LocalOffset, UNIX_EPOCH_JD};

#[derive(Parser)]
#[command(name = "sunrise", about = "Sunrise, sunset and moon phase almanac")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Observer position and local clock.
#[derive(Args)]
struct Place {
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// Standard-time UTC offset in hours
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    tz: f64,
    /// Daylight saving time in effect (adds one hour)
    #[arg(long)]
    dst: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sunrise or sunset for one zenith
    Sun {
        /// Date (YYYY-MM-DD), default today (UTC)
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        place: Place,
        /// Zenith: official, civil, nautical, astronomical, or degrees
        #[arg(long, default_value = "official")]
        zenith: String,
        /// Compute sunset instead of sunrise
        #[arg(long)]
        sunset: bool,
        /// Print every intermediate value of the calculation
        #[arg(long)]
        trace: bool,
    },
    /// All eight rise/set and twilight events
    Events {
        /// Date (YYYY-MM-DD), default today (UTC)
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        place: Place,
    },
    /// Moon age and phase
    Moon {
        /// Date (YYYY-MM-DD), default today (UTC)
        #[arg(long)]
        date: Option<String>,
        /// Method: synodic (default) or ephemeris
        #[arg(long, default_value = "synodic")]
        method: String,
        /// Apply the historical +2 day Julian Day adjustment (ephemeris only)
        #[arg(long)]
        legacy_jd: bool,
    },
    /// Sunrise, sunset and moon phase on one line
    Report {
        /// Date (YYYY-MM-DD), default today (UTC)
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        place: Place,
        /// Method: synodic (default) or ephemeris
        #[arg(long, default_value = "synodic")]
        method: String,
    },
    /// Daily listing for a whole month
    Month {
        /// Year, default the current year (UTC)
        #[arg(long, allow_negative_numbers = true)]
        year: Option<i32>,
        /// Month (1-12), default the current month (UTC)
        #[arg(long)]
        month: Option<u32>,
        #[command(flatten)]
        place: Place,
        /// Method: synodic (default) or ephemeris
        #[arg(long, default_value = "synodic")]
        method: String,
    },
}

fn today_utc() -> CalendarDate {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|e| {
            eprintln!("System clock before 1970: {e}");
            std::process::exit(1);
        })
        .as_secs_f64();
    CalendarDate::from_julian_day(UNIX_EPOCH_JD + secs / 86_400.0).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn parse_date(s: Option<&str>) -> CalendarDate {
    let Some(s) = s else {
        return today_utc();
    };
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn parse_place(place: &Place) -> (GeoCoordinate, LocalOffset) {
    let coord = GeoCoordinate::new(place.lat, place.lon).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let offset = LocalOffset::new(place.tz, place.dst).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    (coord, offset)
}

fn parse_zenith(s: &str) -> f64 {
    if let Some(z) = Zenith::from_name(s) {
        return z.degrees();
    }
    s.parse().unwrap_or_else(|_| {
        eprintln!("Invalid zenith: {s}");
        let names: Vec<&str> = ALL_ZENITHS.iter().map(|z| z.name()).collect();
        eprintln!("Valid: {}, or degrees", names.join(", "));
        std::process::exit(1);
    })
}

fn parse_method(s: &str) -> MoonPhaseMethod {
    MoonPhaseMethod::from_name(s).unwrap_or_else(|| {
        eprintln!("Invalid method: {s} (synodic or ephemeris)");
        std::process::exit(1);
    })
}

fn moon_phase(
    date: &CalendarDate,
    method: MoonPhaseMethod,
    config: &MoonPhaseConfig,
) -> MoonPhaseResult {
    compute_moon_phase(date, method, config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn format_result(result: &SolarEventResult, offset: &LocalOffset) -> String {
    match result {
        SolarEventResult::Event { utc_hours } => format!(
            "{} UTC, {} local",
            ClockTime::from_hours(*utc_hours),
            ClockTime::from_hours(offset.to_local_hours(*utc_hours))
        ),
        SolarEventResult::NeverRises => "sun never rises (polar night)".to_string(),
        SolarEventResult::NeverSets => "sun never sets (midnight sun)".to_string(),
    }
}

fn local_clock(result: &SolarEventResult, offset: &LocalOffset) -> String {
    match result.utc_hours() {
        Some(h) => ClockTime::from_hours(offset.to_local_hours(h)).to_string(),
        None => "--:--".to_string(),
    }
}

fn print_trace(trace: &SolarTrace) {
    println!("  Day of year (N):        {}", trace.day_of_year);
    println!("  Longitude hour:         {:.6}", trace.longitude_hours);
    println!("  Approximate time (t):   {:.6}", trace.approx_time_days);
    println!("  Mean anomaly (M):       {:.6} deg", trace.mean_anomaly_deg);
    println!("  True longitude (L):     {:.6} deg", trace.true_longitude_deg);
    println!("  Right ascension (RA):   {:.6} h", trace.right_ascension_hours);
    println!("  sin(declination):       {:.6}", trace.sin_declination);
    println!("  cos(declination):       {:.6}", trace.cos_declination);
    println!("  cos(hour angle):        {:.6}", trace.cos_hour_angle);
    if let Some(h) = trace.hour_angle_hours {
        println!("  Hour angle (H):         {h:.6} h");
    }
    if let Some(t) = trace.local_mean_time_hours {
        println!("  Local mean time (T):    {t:.6} h");
    }
}

fn print_moon(result: &MoonPhaseResult) {
    let bucket = classify(result.age_days);
    println!(
        "  Age: {:.4} days ({} method)",
        result.age_days,
        result.method.name()
    );
    println!(
        "  Phase: {} {} (day {}, {:.1}% of cycle)",
        bucket.name.glyph(),
        bucket.name.name(),
        bucket.bucket,
        bucket.percent
    );
    if bucket.is_full {
        println!("  Fullmoon");
    }
    if let Some(eph) = &result.ephemeris {
        println!("  Illuminated:            {:.1}%", eph.illuminated_fraction * 100.0);
        println!("  Moon longitude:         {:.4} deg", eph.moon_longitude_deg);
        println!("  Moon latitude:          {:.4} deg", eph.moon_latitude_deg);
        println!("  Moon distance:          {:.0} km", eph.moon_distance_km);
        println!("  Moon angular diameter:  {:.4} deg", eph.moon_angular_diameter_deg);
        println!("  Moon parallax:          {:.4} deg", eph.moon_parallax_deg);
        println!("  Sun longitude:          {:.4} deg", eph.sun_longitude_deg);
        println!("  Sun distance:           {:.0} km", eph.sun_distance_km);
        println!("  Sun angular diameter:   {:.4} deg", eph.sun_angular_diameter_deg);
    }
}

fn report_line(
    date: &CalendarDate,
    coord: &GeoCoordinate,
    offset: &LocalOffset,
    method: MoonPhaseMethod,
) -> String {
    let rise = solve_event(date, coord, SolarEvent::Sunrise);
    let set = solve_event(date, coord, SolarEvent::Sunset);
    let moon = moon_phase(date, method, &MoonPhaseConfig::default());
    let bucket = classify(moon.age_days);
    format!(
        "{date}  rise {}  set {}  moon {} {:<15} {:>2}{}",
        local_clock(&rise, offset),
        local_clock(&set, offset),
        bucket.name.glyph(),
        bucket.name.name(),
        bucket.bucket,
        if bucket.is_full { "  Fullmoon" } else { "" }
    )
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sun {
            date,
            place,
            zenith,
            sunset,
            trace,
        } => {
            let date = parse_date(date.as_deref());
            let (coord, offset) = parse_place(&place);
            let zenith_deg = parse_zenith(&zenith);
            let steps = trace_solar_event(&date, &coord, zenith_deg, !sunset).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });

            println!(
                "{} for {} at {:.4} deg N, {:.4} deg E (zenith {:.4} deg):",
                if sunset { "Sunset" } else { "Sunrise" },
                date,
                coord.latitude_deg(),
                coord.longitude_deg(),
                zenith_deg
            );
            if trace {
                print_trace(&steps);
            }
            println!("  {}", format_result(&steps.result, &offset));
        }

        Commands::Events { date, place } => {
            let date = parse_date(date.as_deref());
            let (coord, offset) = parse_place(&place);

            println!(
                "Rise/Set events for {} at {:.4} deg N, {:.4} deg E:\n",
                date,
                coord.latitude_deg(),
                coord.longitude_deg()
            );
            for (event, result) in &compute_all_events(&date, &coord) {
                println!("  {:20} {}", event.name(), format_result(result, &offset));
            }
        }

        Commands::Moon {
            date,
            method,
            legacy_jd,
        } => {
            let date = parse_date(date.as_deref());
            let method = parse_method(&method);
            let config = if legacy_jd {
                MoonPhaseConfig::LEGACY
            } else {
                MoonPhaseConfig::default()
            };
            let result = moon_phase(&date, method, &config);

            println!("Moon phase for {date}:");
            print_moon(&result);
        }

        Commands::Report {
            date,
            place,
            method,
        } => {
            let date = parse_date(date.as_deref());
            let (coord, offset) = parse_place(&place);
            let method = parse_method(&method);
            println!("{}", report_line(&date, &coord, &offset, method));
        }

        Commands::Month {
            year,
            month,
            place,
            method,
        } => {
            let today = today_utc();
            let year = year.unwrap_or(today.year());
            let month = month.unwrap_or(today.month());
            let first = CalendarDate::new(year, month, 1).unwrap_or_else(|e| {
                eprintln!("Invalid date: {e}");
                std::process::exit(1);
            });
            let (coord, offset) = parse_place(&place);
            let method = parse_method(&method);

            for day in 1..=first.days_in_month() {
                let date = first.with_day(day).unwrap_or_else(|e| {
                    eprintln!("Invalid date: {e}");
                    std::process::exit(1);
                });
                println!("{}", report_line(&date, &coord, &offset, method));
            }
        }
    }
}
