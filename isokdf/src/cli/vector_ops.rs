//! Vectors command

use crate::vectors::run_published;
use serde_json::json;

/// Run `isokdf vectors`; returns whether every vector passed
pub fn handle_vectors(use_json: bool) -> Result<bool, Box<dyn std::error::Error>> {
    let outcomes = run_published();
    let failed = outcomes.iter().filter(|o| !o.passed).count();

    if use_json {
        println!(
            "{}",
            json!({
                "success": failed == 0,
                "operation": "vectors",
                "total": outcomes.len(),
                "failed": failed,
                "results": outcomes,
            })
        );
    } else {
        for outcome in &outcomes {
            let status = if outcome.passed { "ok" } else { "FAILED" };
            println!("{:<24} {status}", outcome.name);
            if !outcome.passed {
                println!("  expected: {}", outcome.expected);
                println!("  actual:   {}", outcome.actual);
            }
        }
        println!("{} of {} vectors passed", outcomes.len() - failed, outcomes.len());
    }

    Ok(failed == 0)
}
