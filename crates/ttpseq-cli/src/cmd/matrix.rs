use crate::output::{print_json, print_matrix};
use std::path::Path;
use ttpseq_core::matrix::TransitionMatrix;

pub fn run(
    corpus: Option<&Path>,
    config_path: Option<&Path>,
    filtered_only: bool,
    full_only: bool,
    json: bool,
) -> anyhow::Result<()> {
    let agg = super::load_aggregates(corpus, config_path)?;

    if json {
        #[derive(serde::Serialize)]
        struct MatrixOutput<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            filtered: Option<&'a TransitionMatrix>,
            #[serde(skip_serializing_if = "Option::is_none")]
            full: Option<&'a TransitionMatrix>,
        }

        let output = MatrixOutput {
            filtered: (!full_only).then_some(&agg.filtered),
            full: (!filtered_only).then_some(&agg.full),
        };
        return print_json(&output);
    }

    // Filtered grid first, then the full grid.
    if !full_only {
        println!("Filtered transitions:");
        print_matrix(&agg.filtered);
    }
    if !filtered_only {
        if !full_only {
            println!();
        }
        println!("All transitions:");
        print_matrix(&agg.full);
    }

    Ok(())
}
