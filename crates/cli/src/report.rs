use wordsearch_protocol::SolveReport;

/// Plain-text summary: one `WORD: range` line per found word, the tally, and
/// the words that were not found.
pub fn render_text_report(report: &SolveReport) -> String {
    let mut out = String::new();
    for found in &report.found {
        out.push_str(&format!("{}: {}\n", found.word, found.range));
    }
    if !report.found.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!(
        "Found {}/{} words ({}%)\n",
        report.found_count, report.total, report.percent
    ));
    if !report.missing.is_empty() {
        out.push_str(&format!("Missing: {}\n", report.missing.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wordsearch_search::{solve, Grid};

    #[test]
    fn renders_found_and_missing_words() {
        let grid = Grid::from_rows(["ABC", "DEF", "GHI"]);
        let words = ["ABC", "AEI", "CEG", "XYZ"];
        let solution = solve(&grid, &words).expect("solve");
        let text = render_text_report(&SolveReport::build(&words, &solution));
        assert_eq!(
            text,
            "ABC: (0,0)...(2,0)\n\
             AEI: (0,0)...(2,2)\n\
             CEG: (0,2)...(2,0)\n\
             \n\
             Found 3/4 words (75%)\n\
             Missing: XYZ\n"
        );
    }

    #[test]
    fn nothing_found() {
        let grid = Grid::from_rows(["ABC"]);
        let words = ["XYZ"];
        let solution = solve(&grid, &words).expect("solve");
        let text = render_text_report(&SolveReport::build(&words, &solution));
        assert_eq!(text, "Found 0/1 words (0%)\nMissing: XYZ\n");
    }
}
