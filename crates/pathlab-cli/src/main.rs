use pathlab::dijkstra::{IterationRow, Snapshot};
use pathlab::graph::{GraphDocument, MatrixDocument};
use pathlab::{Distance, DistanceMatrix, FloydIteration, Highlight, Session, SessionOptions};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{Read, Write};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Pathlab(pathlab::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Pathlab(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<pathlab::Error> for CliError {
    fn from(value: pathlab::Error) -> Self {
        Self::Pathlab(value)
    }
}

impl From<pathlab::graph::Error> for CliError {
    fn from(value: pathlab::graph::Error) -> Self {
        Self::Pathlab(value.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    Dijkstra,
    #[default]
    Floyd,
    Matrix,
    Route,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    from: Option<String>,
    to: Option<String>,
    pretty: bool,
    no_steps: bool,
}

#[derive(Serialize)]
struct DijkstraOut<'a> {
    from: &'a str,
    to: &'a str,
    distance: Distance,
    path: Vec<String>,
    #[serde(skip_serializing_if = "is_empty")]
    iterations: &'a [IterationRow],
    #[serde(skip_serializing_if = "is_empty")]
    snapshots: &'a [Snapshot],
}

#[derive(Serialize)]
struct RouteOut<'a> {
    from: &'a str,
    to: &'a str,
    distance: Distance,
    path: Vec<String>,
}

#[derive(Serialize)]
struct FloydOut<'a> {
    names: &'a [String],
    distances: &'a DistanceMatrix,
    routes: Vec<RouteOut<'a>>,
    #[serde(skip_serializing_if = "is_empty")]
    iterations: &'a [FloydIteration],
}

#[derive(Serialize)]
struct HighlightOut<'a> {
    #[serde(flatten)]
    route: RouteOut<'a>,
    highlight: Highlight,
}

fn is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

fn usage() -> &'static str {
    "pathlab-cli\n\
\n\
USAGE:\n\
  pathlab-cli dijkstra --from <name> --to <name> [--pretty] [--no-steps] [<path>|-]\n\
  pathlab-cli [floyd] [--pretty] [--no-steps] [<path>|-]\n\
  pathlab-cli matrix [--pretty] [<path>|-]\n\
  pathlab-cli route --from <name> --to <name> [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is a JSON graph document ({\"nodes\": [...], \"edges\": [...]}) or a matrix\n\
    document ({\"names\": [...], \"rows\": [[...], ...]}).\n\
  - Unreachable distances are printed as null.\n\
  - Set PATHLAB_RUN_TIMING=1 to print engine timings on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "dijkstra" => args.command = Command::Dijkstra,
            "floyd" => args.command = Command::Floyd,
            "matrix" => args.command = Command::Matrix,
            "route" => args.command = Command::Route,
            "--pretty" => args.pretty = true,
            "--no-steps" => args.no_steps = true,
            "--from" => {
                let Some(name) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.from = Some(name.clone());
            }
            "--to" => {
                let Some(name) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.to = Some(name.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if matches!(args.command, Command::Dijkstra | Command::Route)
        && (args.from.is_none() || args.to.is_none())
    {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Loads the input into a fresh session. Matrix input also returns the parsed matrix so
/// Floyd-Warshall runs on exactly what was typed.
///
/// A document with `rows` is a matrix; anything else must be a graph.
fn load_session(
    text: &str,
    options: SessionOptions,
) -> Result<(Session, Option<(DistanceMatrix, Vec<String>)>), CliError> {
    let value: Value = serde_json::from_str(text)?;
    if value.get("rows").is_some() {
        let doc = MatrixDocument::deserialize(&value)?;
        let (matrix, names) = doc.to_matrix()?;
        let mut session = Session::new(options);
        session.load_matrix(&matrix, &names)?;
        Ok((session, Some((matrix, names))))
    } else {
        let doc = GraphDocument::deserialize(&value)?;
        Ok((Session::from_document(options, &doc)?, None))
    }
}

fn node_index(session: &Session, name: &str) -> Result<usize, CliError> {
    session
        .graph()
        .node_index(name.trim())
        .ok_or_else(|| CliError::from(pathlab::graph::Error::UnknownNode {
            name: name.to_string(),
        }))
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let options = SessionOptions::default().with_record_steps(!args.no_steps);
    let (mut session, typed) = load_session(&text, options)?;

    match args.command {
        Command::Dijkstra => {
            let (Some(from), Some(to)) = (args.from.as_deref(), args.to.as_deref()) else {
                return Err(CliError::Usage(usage()));
            };
            let run = session.run_dijkstra_by_name(from, to)?;
            let names = session.graph().node_names();
            let iterations = run.iteration_rows(&names);
            let out = DijkstraOut {
                from,
                to,
                distance: run.outcome.distance(),
                path: run.outcome.names(&names),
                iterations: &iterations,
                snapshots: &run.snapshots,
            };
            write_json(&out, args.pretty)
        }
        Command::Floyd => {
            let run = match &typed {
                Some((matrix, names)) => session.run_floyd_warshall_on(matrix, names)?,
                None => session.run_floyd_warshall()?,
            };
            let routes = run
                .routes()
                .into_iter()
                .map(|r| RouteOut {
                    from: &run.names[r.from],
                    to: &run.names[r.to],
                    distance: r.outcome.distance(),
                    path: r.outcome.names(&run.names),
                })
                .collect();
            let out = FloydOut {
                names: &run.names,
                distances: &run.distances,
                routes,
                iterations: &run.iterations,
            };
            write_json(&out, args.pretty)
        }
        Command::Matrix => write_json(&MatrixDocument::from_graph(session.graph()), args.pretty),
        Command::Route => {
            let (Some(from), Some(to)) = (args.from.as_deref(), args.to.as_deref()) else {
                return Err(CliError::Usage(usage()));
            };
            let origin = node_index(&session, from)?;
            let destination = node_index(&session, to)?;
            match &typed {
                Some((matrix, names)) => session.run_floyd_warshall_on(matrix, names)?,
                None => session.run_floyd_warshall()?,
            };
            let highlight = session.highlight_route(origin, destination)?;
            let names = session.graph().node_names();
            let distance = session
                .last_floyd_run()
                .map_or(Distance::Unreachable, |run| run.distances.get(origin, destination));
            let out = HighlightOut {
                route: RouteOut {
                    from,
                    to,
                    distance,
                    path: highlight
                        .nodes
                        .iter()
                        .map(|&ix| names[ix].clone())
                        .collect(),
                },
                highlight,
            };
            write_json(&out, args.pretty)
        }
    }
}

fn main() {
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

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
