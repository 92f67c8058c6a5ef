mod github;

use chrono::NaiveDate;
use contribgraph::render::raster::{RasterError, RasterOptions};
use contribgraph::render::{GraphRenderer, render_card_html};
use contribgraph::time::with_fixed_today;
use contribgraph::{
    DailyCounts, GraphQuery, Organization, OutputFormat, auto_detect_organization, clamp_months,
    collect_daily_counts, date_range, default_orgs, detect_organizations, generate_demo_data,
    generate_grid_data,
};
use github::{GithubClient, GithubError};
use serde::Serialize;
use std::io::{Read, Write};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Data(contribgraph::Error),
    Raster(RasterError),
    Github(GithubError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Data(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Github(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<contribgraph::Error> for CliError {
    fn from(value: contribgraph::Error) -> Self {
        Self::Data(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<GithubError> for CliError {
    fn from(value: GithubError) -> Self {
        Self::Github(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Grid,
    Card,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    query: Option<String>,
    username: Option<String>,
    orgs: Option<String>,
    months: Option<String>,
    format: Option<String>,
    demo: bool,
    data: Option<String>,
    token: Option<String>,
    today: Option<NaiveDate>,
    scale: f32,
    background: Option<String>,
    base_url: String,
    pretty: bool,
    out: Option<String>,
}

impl Args {
    /// `--query` first, then individual flags on top.
    fn graph_query(&self) -> GraphQuery {
        let mut query = GraphQuery::from_query_str(self.query.as_deref().unwrap_or(""));
        if let Some(username) = self.username.as_deref().map(str::trim) {
            query.username = (!username.is_empty()).then(|| username.to_string());
        }
        if let Some(orgs) = &self.orgs {
            query.orgs = Some(orgs.clone());
        }
        if let Some(months) = self.months.as_deref() {
            query.months = clamp_months(Some(months));
        }
        if let Some(format) = self.format.as_deref() {
            query.format = OutputFormat::parse(Some(format));
        }
        if self.demo {
            query.demo = true;
        }
        query
    }
}

fn usage() -> &'static str {
    "contribgraph\n\
\n\
USAGE:\n\
  contribgraph [render] --username <login> [--orgs <spec>|auto] [--months <1-12>] [--format svg|png] [--scale <n>] [--background <css-color>] [--data <path>|-] [--demo] [--token <token>] [--today <YYYY-MM-DD>] [--out <path>|-]\n\
  contribgraph grid --username <login> [--orgs <spec>|auto] [--months <1-12>] [--data <path>|-] [--demo] [--pretty] [--out <path>]\n\
  contribgraph card --username <login> [--orgs <spec>] [--months <1-12>] [--demo] [--base-url <url>] [--out <path>]\n\
\n\
NOTES:\n\
  - <spec> is a comma-separated list of name[:hex[:label]], e.g. rails:CC0000:Rails,hotwired:1a1a1a:Hotwire.\n\
  - --query accepts the same parameters as a query string (username=..&orgs=..&months=..&format=..&demo=true); flags win.\n\
  - Contributions come from --data (JSON: {org: {YYYY-MM-DD: count}}), otherwise from GitHub using\n\
    --token or GITHUB_TOKEN; without a token, or with --demo, random demo data is used.\n\
  - render prints SVG to stdout by default; PNG defaults to ./out.png. Use --out - for stdout.\n\
  - Set RUST_LOG to adjust logging (default: contribgraph=info), written to stderr.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        scale: RasterOptions::default().scale,
        base_url: "http://localhost:3000".to_string(),
        ..Default::default()
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "render" => args.command = Command::Render,
            "grid" => args.command = Command::Grid,
            "card" => args.command = Command::Card,
            "--pretty" => args.pretty = true,
            "--demo" => args.demo = true,
            "--query" => args.query = Some(next_value(&mut it)?.clone()),
            "--username" | "-u" => args.username = Some(next_value(&mut it)?.clone()),
            "--orgs" => args.orgs = Some(next_value(&mut it)?.clone()),
            "--months" => args.months = Some(next_value(&mut it)?.clone()),
            "--format" => args.format = Some(next_value(&mut it)?.clone()),
            "--data" => args.data = Some(next_value(&mut it)?.clone()),
            "--token" => args.token = Some(next_value(&mut it)?.clone()),
            "--base-url" => args.base_url = next_value(&mut it)?.clone(),
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            "--today" => {
                let raw = next_value(&mut it)?;
                args.today = Some(
                    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "--scale" => {
                let raw = next_value(&mut it)?;
                args.scale = raw.parse::<f32>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.scale.is_finite() && args.scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let bg = next_value(&mut it)?;
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            _ => return Err(CliError::Usage(usage())),
        }
    }

    if args.token.is_none() {
        args.token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
    }

    Ok(args)
}

fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(input)?)
}

fn write_bytes(bytes: &[u8], out: Option<&str>) -> Result<(), CliError> {
    match out {
        None | Some("-") => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, bytes)?;
            Ok(())
        }
    }
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    write_bytes(text.as_bytes(), out)
}

/// Organizations and their daily counts: from a JSON file, GitHub, or the demo generator.
fn load_contributions(
    args: &Args,
    query: &GraphQuery,
    username: &str,
) -> Result<(Vec<Organization>, DailyCounts), CliError> {
    if let Some(path) = args.data.as_deref() {
        let counts = DailyCounts::from_json(&read_input(path)?)?;
        let organizations = if query.auto_detect_orgs() {
            let detected: Vec<Organization> = counts
                .iter()
                .enumerate()
                .map(|(i, (name, _))| auto_detect_organization(name, i))
                .collect();
            if detected.is_empty() {
                default_orgs()
            } else {
                detected
            }
        } else {
            query.organizations()
        };
        tracing::info!(path, organizations = organizations.len(), "loaded contribution data");
        return Ok((organizations, counts));
    }

    let token = args.token.as_deref().filter(|_| !query.demo);
    let Some(token) = token else {
        let organizations = if query.auto_detect_orgs() {
            default_orgs()
        } else {
            query.organizations()
        };
        tracing::info!(demo = query.demo, "no GitHub data requested; using demo data");
        let counts = generate_demo_data(&organizations, query.months);
        return Ok((organizations, counts));
    };

    let client = GithubClient::new(token)?;
    let range = date_range(query.months);
    let organizations = if query.auto_detect_orgs() {
        detect_organizations(&client, username, &range)
    } else {
        query.organizations()
    };
    let counts = collect_daily_counts(&client, username, &organizations, &range);
    Ok((organizations, counts))
}

fn run(args: Args) -> Result<(), CliError> {
    let query = args.graph_query();
    let username = query
        .username()
        .map_err(|_| CliError::Usage("missing --username (see --help)"))?
        .to_string();

    match args.command {
        Command::Card => {
            let html = render_card_html(&query, &args.base_url)?;
            write_bytes(html.as_bytes(), args.out.as_deref())
        }
        Command::Grid => {
            let (organizations, counts) = load_contributions(&args, &query, &username)?;
            let grid = generate_grid_data(&counts, &organizations, query.months);
            write_json(&grid, args.pretty, args.out.as_deref())
        }
        Command::Render => {
            let (organizations, counts) = load_contributions(&args, &query, &username)?;
            let renderer = GraphRenderer::new();
            match query.format {
                OutputFormat::Svg => {
                    let svg = renderer.render_counts_svg(
                        &counts,
                        &organizations,
                        query.months,
                        &username,
                    );
                    write_bytes(svg.as_bytes(), args.out.as_deref())
                }
                OutputFormat::Png => {
                    let grid = generate_grid_data(&counts, &organizations, query.months);
                    let raster = RasterOptions {
                        scale: args.scale,
                        background: args.background.clone(),
                    };
                    let png = renderer.render_png(
                        &grid,
                        &organizations,
                        query.months,
                        &username,
                        &raster,
                    )?;
                    write_bytes(&png, Some(args.out.as_deref().unwrap_or("out.png")))
                }
            }
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,contribgraph=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let today = args.today;
    match with_fixed_today(today, || run(args)) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
