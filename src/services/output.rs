use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// One compact line per session reply; rejected operations keep the session
/// alive, so they are reported on stdout instead of aborting.
pub fn print_reply<T: Serialize>(
    json: bool,
    data: &T,
    rows: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(&JsonOut { ok: true, data })?);
    } else {
        for line in rows(data) {
            println!("{}", line);
        }
    }
    Ok(())
}

pub fn print_rejection(json: bool, error: &anyhow::Error) {
    if json {
        println!(
            "{}",
            serde_json::json!({ "ok": false, "error": error.to_string() })
        );
    } else {
        println!("rejected: {}", error);
    }
}
