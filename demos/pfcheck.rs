use clap::{self, Parser, ValueEnum};
use processingformats::*;
use serde_json::Value;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Pick,
    Hypocenter,
    LocationRequest,
    LocationResult,
    TravelTimeData,
    TravelTimePlotData,
    TravelTimeRequest,
    TravelTimeSession,
    TravelTimePlotRequest,
}

impl Format {
    /// Guess the format from the keys a document carries.
    fn detect(json: &Value) -> Option<Format> {
        let has = |key: &str| json.get(key).is_some();
        match DataKind::of(json) {
            Some(DataKind::TravelTimeData) => return Some(Format::TravelTimeData),
            Some(DataKind::TravelTimePlotData) => return Some(Format::TravelTimePlotData),
            None => {}
        }
        if has("InputData") || has("SourceOriginTime") {
            Some(Format::LocationRequest)
        } else if has("Hypocenter") {
            Some(Format::LocationResult)
        } else if has("PickedPhase") || has("Site") {
            Some(Format::Pick)
        } else if has("Data") || has("Distance") {
            Some(Format::TravelTimeRequest)
        } else if has("Response") || has("Source") {
            Some(Format::TravelTimePlotRequest)
        } else if has("PhaseTypes") || has("SourceDepth") {
            Some(Format::TravelTimeSession)
        } else if has("Latitude") && has("Time") {
            Some(Format::Hypocenter)
        } else {
            None
        }
    }

    fn check(self, json: &Value) -> (Vec<String>, Value) {
        fn run<T: ProcessingFormat>(json: &Value) -> (Vec<String>, Value) {
            let record = T::from_json(json);
            let canonical = record.to_json().unwrap_or(Value::Null);
            (record.errors(), canonical)
        }
        match self {
            Format::Pick => run::<Pick>(json),
            Format::Hypocenter => run::<Hypocenter>(json),
            Format::LocationRequest => run::<LocationRequest>(json),
            Format::LocationResult => run::<LocationResult>(json),
            Format::TravelTimeData => run::<TravelTimeData>(json),
            Format::TravelTimePlotData => run::<TravelTimePlotData>(json),
            Format::TravelTimeRequest => run::<TravelTimeRequest>(json),
            Format::TravelTimeSession => run::<TravelTimeSession>(json),
            Format::TravelTimePlotRequest => run::<TravelTimePlotRequest>(json),
        }
    }
}

#[derive(clap::Parser)]
struct Cmd {
    /// JSON document to check
    file: String,
    /// Format of the document, guessed from its keys if omitted
    #[arg(short, long, value_enum)]
    format: Option<Format>,
    /// Print the document as it would be written back
    #[arg(short, long)]
    canonical: bool,
}

fn main() {
    let _ = env_logger::builder().try_init();
    let cmd = Cmd::parse();
    let text = std::fs::read_to_string(&cmd.file).expect("Cannot read file");
    let json: Value = serde_json::from_str(&text).expect("Not a JSON document");
    let format = cmd
        .format
        .or_else(|| Format::detect(&json))
        .expect("Cannot tell the format, pass --format");
    let (errors, canonical) = format.check(&json);
    if errors.is_empty() {
        println!("{:?}: valid", format);
    } else {
        println!("{:?}: {} errors", format, errors.len());
        for error in &errors {
            println!("  {}", error);
        }
    }
    if cmd.canonical {
        println!("{}", serde_json::to_string_pretty(&canonical).unwrap_or_default());
    }
}
