mod scene;

use joy::ReferenceRegistry;
use joy::render::render;
use scene::{ImageSpec, Scene};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Joy(joy::Error),
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
    UnknownImage(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Joy(err) => write!(f, "{err}"),
            CliError::Yaml(err) => write!(f, "invalid scene file: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::UnknownImage(name) => write!(f, "no image named `{name}` in scene"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<joy::Error> for CliError {
    fn from(value: joy::Error) -> Self {
        Self::Joy(value)
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(value: serde_yaml::Error) -> Self {
        Self::Yaml(value)
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
    Build,
    Render,
    Json,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    out_dir: Option<String>,
    out: Option<String>,
    only: Option<String>,
    name: Option<String>,
    width: Option<f64>,
    height: Option<f64>,
    id_suffix: Option<String>,
    pretty: bool,
    verbose: bool,
}

fn usage() -> &'static str {
    "joy-cli\n\
\n\
USAGE:\n\
  joy-cli [build] [--out-dir <dir>] [--only <name>] [--width <w>] [--height <h>] [--id-suffix <s>] [<scene.yml>|-]\n\
  joy-cli render --name <name> [--out <path>] [--width <w>] [--height <h>] [--id-suffix <s>] [<scene.yml>|-]\n\
  joy-cli json --name <name> [--pretty] [--id-suffix <s>] [<scene.yml>|-]\n\
\n\
NOTES:\n\
  - If <scene.yml> is omitted or '-', the scene is read from stdin.\n\
  - build writes <name>.svg for every image; --out-dir defaults to the scene file's directory.\n\
  - --width/--height apply to images that do not set their own canvas size (default 300x300).\n\
  - --id-suffix fixes the suffix of generated reference ids for reproducible output.\n\
  - Logging goes to stderr; set JOY_LOG (e.g. JOY_LOG=debug) or pass --verbose.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_size(raw: &str) -> Result<f64, CliError> {
    let v = raw.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
    if !(v.is_finite() && v > 0.0) {
        return Err(CliError::Usage(usage()));
    }
    Ok(v)
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "build" => args.command = Command::Build,
            "render" => args.command = Command::Render,
            "json" => args.command = Command::Json,
            "--pretty" => args.pretty = true,
            "--verbose" | "-v" => args.verbose = true,
            "--out-dir" => args.out_dir = Some(next_value(&mut it)?.clone()),
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            "--only" => args.only = Some(next_value(&mut it)?.clone()),
            "--name" => args.name = Some(next_value(&mut it)?.clone()),
            "--id-suffix" => args.id_suffix = Some(next_value(&mut it)?.clone()),
            "--width" => args.width = Some(parse_size(next_value(&mut it)?)?),
            "--height" => args.height = Some(parse_size(next_value(&mut it)?)?),
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

    Ok(args)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("JOY_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
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

fn default_out_dir(input: Option<&str>) -> PathBuf {
    match input {
        Some(path) if path != "-" => Path::new(path)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
        _ => PathBuf::new(),
    }
}

fn registry(args: &Args) -> ReferenceRegistry {
    match &args.id_suffix {
        Some(suffix) => ReferenceRegistry::with_suffix(suffix),
        None => ReferenceRegistry::new(),
    }
}

fn find_image<'a>(scene: &'a Scene, name: Option<&str>) -> Result<&'a ImageSpec, CliError> {
    let Some(name) = name else {
        return Err(CliError::Usage(usage()));
    };
    scene
        .images
        .get(name)
        .ok_or_else(|| CliError::UnknownImage(name.to_string()))
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn build(args: &Args, scene: &Scene) -> Result<(), CliError> {
    let out_dir = args
        .out_dir
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| default_out_dir(args.input.as_deref()));
    if !out_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(&out_dir)?;
    }
    if let Some(only) = args.only.as_deref() {
        if !scene.images.contains_key(only) {
            return Err(CliError::UnknownImage(only.to_string()));
        }
    }

    let registry = registry(args);
    for (name, image) in &scene.images {
        if args.only.as_deref().is_some_and(|only| only != name) {
            continue;
        }
        let document = image.document((args.width, args.height), &registry)?;
        let filename = format!("{name}.svg");
        println!("writing {filename}");
        let path = out_dir.join(&filename);
        tracing::debug!(
            path = %path.display(),
            shapes = document.shapes.len(),
            "writing image"
        );
        std::fs::write(&path, render(&document))?;
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let scene = Scene::from_yaml(&text)?;
    tracing::debug!(images = scene.images.len(), "loaded scene");

    match args.command {
        Command::Build => build(&args, &scene),
        Command::Render => {
            let image = find_image(&scene, args.name.as_deref())?;
            let document = image.document((args.width, args.height), &registry(&args))?;
            write_text(&render(&document), args.out.as_deref())
        }
        Command::Json => {
            let image = find_image(&scene, args.name.as_deref())?;
            let document = image.document((args.width, args.height), &registry(&args))?;
            write_json(&document.shapes, args.pretty)?;
            println!();
            Ok(())
        }
    }
}

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    init_tracing(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
