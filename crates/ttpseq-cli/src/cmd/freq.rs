use crate::output::{print_json, print_table};
use std::path::Path;

pub fn run(corpus: Option<&Path>, config_path: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let agg = super::load_aggregates(corpus, config_path)?;

    if json {
        return print_json(&agg.frequency);
    }

    let rows: Vec<Vec<String>> = agg
        .frequency
        .iter()
        .map(|(id, count)| vec![id.to_string(), count.to_string()])
        .collect();
    print_table(&["TACTIC", "COUNT"], &rows);

    Ok(())
}
