// JSON-lines bridge for GUI and script front-ends

use crate::config::Config;
use crate::core::api::{Request, Response};
use crate::core::operations::ProductOperations;
use crate::core::traits::ProductStorage;
use crate::manager::{close_operations, open_operations};
use crate::utils::error::{AppError, AppResult};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub fn handle_serve_command(config: Config) -> AppResult<()> {
    let mut operations = open_operations(&config);
    info!(data_file = %config.general.data_file.display(), "serving requests on stdin");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run_bridge(&mut operations, stdin.lock(), stdout.lock());

    close_operations(operations);
    result
}

/// Answer one request per input line until EOF
///
/// Blank lines are skipped; lines that are not a valid request get an
/// error response and the loop carries on.
pub fn run_bridge<S, R, W>(
    operations: &mut ProductOperations<S>,
    reader: R,
    mut writer: W,
) -> AppResult<()>
where
    S: ProductStorage,
    R: BufRead,
    W: Write,
{
    for line in reader.lines() {
        let line = line.map_err(|e| AppError::Io(e.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => {
                debug!(?request, "handling request");
                operations.handle(request)
            }
            Err(e) => Response::error(format!("Invalid request: {}", e)),
        };

        let encoded = serde_json::to_string(&response)
            .map_err(|e| AppError::System(format!("Failed to encode response: {}", e)))?;
        writeln!(writer, "{}", encoded).map_err(|e| AppError::Io(e.to_string()))?;
        writer.flush().map_err(|e| AppError::Io(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::Product;
    use crate::storage::MemoryStorage;
    use serde_json::{Value, json};
    use std::io::Cursor;

    fn run(operations: &mut ProductOperations<MemoryStorage>, input: &str) -> Vec<Value> {
        let mut output = Vec::new();
        run_bridge(operations, Cursor::new(input.to_string()), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_bridge_round_trip() {
        let mut operations = ProductOperations::new(MemoryStorage::with_products(vec![
            Product::new(1, "Existing".to_string(), 1.0, "1".to_string()),
        ]));

        let input = [
            json!({ "method": "add", "params": { "name": "New", "timeCalculation": "2.5" } }),
            json!({ "method": "search", "params": { "query": "NEW" } }),
            json!({ "method": "deleteMultiple", "params": { "ids": [1] } }),
            json!({ "method": "getAll" }),
        ]
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n");

        let responses = run(&mut operations, &input);

        assert_eq!(responses.len(), 4);
        assert_eq!(responses[0]["status"], "product");
        assert_eq!(responses[0]["product"]["id"], 2);
        assert_eq!(responses[0]["product"]["processingTime"], 2.5);
        assert_eq!(responses[1]["products"].as_array().unwrap().len(), 1);
        assert_eq!(responses[2], json!({ "status": "ok" }));
        assert_eq!(responses[3]["products"][0]["name"], "New");
        assert_eq!(operations.storage().stored().len(), 1);
    }

    #[test]
    fn test_bridge_reports_bad_lines_and_continues() {
        let mut operations = ProductOperations::new(MemoryStorage::new());

        let input = "not json\n\n{\"method\":\"evaluate\",\"params\":{\"formula\":\"1+2\"}}\n";
        let responses = run(&mut operations, input);

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["status"], "error");
        assert_eq!(responses[1], json!({ "status": "value", "value": 3.0 }));
    }
}
