use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tagbox::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Check tracked tags against the target box")]
struct Cmd {
    /// JSON array of centroid objects, e.g. [{"x": 50, "y": 42.5}]
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Write the JSON result here instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(flatten)]
    dims: Dims,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct Dims {
    #[arg(long, global = true, default_value_t = BoxCfg::default().box_width)]
    box_width: f64,
    #[arg(long, global = true, default_value_t = BoxCfg::default().box_height)]
    box_height: f64,
    #[arg(long, global = true, default_value_t = BoxCfg::default().field_width)]
    field_width: f64,
    #[arg(long, global = true, default_value_t = BoxCfg::default().field_height)]
    field_height: f64,
}

impl From<&Dims> for BoxCfg {
    fn from(d: &Dims) -> Self {
        BoxCfg {
            box_width: d.box_width,
            box_height: d.box_height,
            field_width: d.field_width,
            field_height: d.field_height,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Are all centroids inside the box
    Inside,
    /// Left-to-right order of the three tags and the swaps that restore it
    Order,
    /// Compass hints for centroids outside the box
    Moves,
    /// Box overlay descriptor for the renderer (no input needed)
    Outline,
    /// Everything above in one JSON object
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let value = run(&cmd)?;
    emit(&value, cmd.out.as_deref())
}

fn run(cmd: &Cmd) -> Result<Value> {
    let cfg = BoxCfg::from(&cmd.dims);
    let value = match cmd.action {
        Action::Outline => {
            tracing::info!(?cfg, "outline");
            serde_json::to_value(get_box_coordinates(&cfg))?
        }
        Action::Inside => {
            let inside = are_centroids_within_box(&records(cmd)?, &cfg)?;
            tracing::info!(inside, "inside");
            json!({ "inside": inside })
        }
        Action::Order => order_value(&records(cmd)?)?,
        Action::Moves => {
            let moves = determine_move_steps(&records(cmd)?, &cfg)?;
            tracing::info!(moves = moves.len(), "moves");
            json!({ "move_steps": moves })
        }
        Action::Report => report(&records(cmd)?, &cfg)?,
    };
    Ok(value)
}

fn records(cmd: &Cmd) -> Result<Vec<Value>> {
    let Some(input) = cmd.input.as_deref() else {
        bail!("--input is required for this subcommand");
    };
    let records = load_records(input)?;
    tracing::info!(input = %input.display(), count = records.len(), "loaded centroids");
    Ok(records)
}

fn load_records(path: &Path) -> Result<Vec<Value>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let parsed: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as JSON", path.display()))?;
    match parsed {
        Value::Array(items) => Ok(items),
        other => bail!(
            "{}: expected a JSON array of centroids, found {}",
            path.display(),
            kind(&other)
        ),
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn order_value(records: &[Value]) -> Result<Value> {
    let in_order = are_records_in_order(records);
    let steps = determine_reorder_steps_for(records)?;
    tracing::info!(in_order, steps = steps.len(), "order");
    for step in &steps {
        tracing::debug!(from = step.from_index(), to = step.to_index(), "swap");
    }
    Ok(json!({ "in_order": in_order, "reorder_steps": steps }))
}

fn report(records: &[Value], cfg: &BoxCfg) -> Result<Value> {
    // containment has no answer for an empty set; the rest of the report still does
    let inside = match are_centroids_within_box(records, cfg) {
        Ok(b) => json!(b),
        Err(CentroidError::EmptyInput) => Value::Null,
        Err(e) => return Err(e.into()),
    };
    let order = order_value(records)?;
    let moves = determine_move_steps(records, cfg)?;
    tracing::info!(inside = ?inside, moves = moves.len(), "report");
    Ok(json!({
        "version": tagbox::VERSION,
        "box": cfg.boundaries(),
        "inside": inside,
        "in_order": order["in_order"],
        "reorder_steps": order["reorder_steps"],
        "move_steps": moves,
        "outline": get_box_coordinates(cfg),
    }))
}

fn emit(value: &Value, out: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            std::fs::write(path, text)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(out = %path.display(), "wrote");
        }
        None => println!("{}", text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn cmd(args: &[&str]) -> Cmd {
        Cmd::try_parse_from(std::iter::once("cli").chain(args.iter().copied())).unwrap()
    }

    fn write_input(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("centroids.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn dims_default_to_box_cfg() {
        let c = cmd(&["outline"]);
        assert_eq!(BoxCfg::from(&c.dims), BoxCfg::default());
        let c = cmd(&["outline", "--box-width", "10"]);
        assert_eq!(BoxCfg::from(&c.dims).box_width, 10.0);
    }

    #[test]
    fn outline_needs_no_input() {
        let v = run(&cmd(&["outline"])).unwrap();
        assert_eq!(v["x"], json!([30.0, 70.0, 70.0, 30.0, 30.0]));
    }

    #[test]
    fn inside_requires_input() {
        assert!(run(&cmd(&["inside"])).is_err());
    }

    #[test]
    fn order_reports_swaps() {
        let dir = tempdir().unwrap();
        let input = write_input(
            dir.path(),
            r#"[{"x": 30, "y": 40}, {"x": 10, "y": 40}, {"x": 20, "y": 40}]"#,
        );
        let v = run(&cmd(&["order", "--input", input.to_str().unwrap()])).unwrap();
        assert_eq!(v["in_order"], json!(false));
        assert_eq!(v["reorder_steps"], json!([[2, 1], [0, 2]]));
    }

    #[test]
    fn order_needs_only_x() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), r#"[{"x": 30}, {"x": 10}, {"x": 20}]"#);
        let v = run(&cmd(&["order", "--input", input.to_str().unwrap()])).unwrap();
        assert_eq!(v["in_order"], json!(false));
        assert_eq!(v["reorder_steps"], json!([[2, 1], [0, 2]]));

        let sorted = write_input(dir.path(), r#"[{"x": 10}, {"x": 20}, {"x": 30}]"#);
        let v = run(&cmd(&["order", "--input", sorted.to_str().unwrap()])).unwrap();
        assert_eq!(v["in_order"], json!(true));
        assert_eq!(v["reorder_steps"], json!([]));
    }

    #[test]
    fn missing_key_surfaces_as_error() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), r#"[{"x": 50}]"#);
        let err = run(&cmd(&["inside", "--input", input.to_str().unwrap()])).unwrap_err();
        assert!(err.to_string().contains("'y'"));
    }

    #[test]
    fn non_array_input_is_rejected() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), r#"{"x": 1, "y": 2}"#);
        let err = run(&cmd(&["moves", "--input", input.to_str().unwrap()])).unwrap_err();
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn report_with_empty_input_and_out_file() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "[]");
        let out = dir.path().join("nested/report.json");
        let c = cmd(&[
            "report",
            "--input",
            input.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ]);
        let v = run(&c).unwrap();
        assert_eq!(v["inside"], Value::Null);
        assert_eq!(v["reorder_steps"], json!([]));
        emit(&v, c.out.as_deref()).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["box"]["min_x"], json!(30.0));
        assert_eq!(parsed["move_steps"], json!([]));
    }

    #[test]
    fn report_lists_moves() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), r#"[{"x": 0, "y": 42.5}, {"x": 0, "y": 0}]"#);
        let v = run(&cmd(&["report", "--input", input.to_str().unwrap()])).unwrap();
        assert_eq!(v["inside"], json!(false));
        assert_eq!(
            v["move_steps"],
            json!([
                {"index": 0, "direction": "East"},
                {"index": 1, "direction": "East and North"}
            ])
        );
    }
}
