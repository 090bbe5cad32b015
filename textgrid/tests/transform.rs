use textgrid::{ansi, pivot, subgrid, RenderBlock, Table};

fn line_count(text: &str) -> usize {
    text.lines().count()
}

// ============================================================================
// pivot
// ============================================================================

#[test]
fn test_pivot_round_trips_rendered_grids() {
    let input = vec![
        vec!["a".to_owned(), "b".to_owned()],
        vec!["c".to_owned(), "d".to_owned()],
        vec!["e".to_owned(), "f".to_owned()],
    ];
    let transposed = pivot(&input);
    assert_eq!(transposed[0], vec!["a", "c", "e"]);
    assert_eq!(transposed[1], vec!["b", "d", "f"]);
    assert_eq!(pivot(&transposed), input);
}

// ============================================================================
// subgrid
// ============================================================================

#[test]
fn test_subgrid_row_count_sums_packed_row_heights() {
    let tall = Table::new(vec![vec![1, 2], vec![3, 4]]); // renders 2 lines
    let short = Table::new(vec![vec![5]]); // renders 1 line
    let other = Table::new(vec![vec![6]]); // renders 1 line

    let composite = subgrid(2, &[&tall, &short, &other]);
    // packed rows: [tall, short] of height 2, [other] of height 1
    assert_eq!(composite.num_rows(), 3);
    assert_eq!(composite.num_cols(), 2);

    let rendered = composite.as_markdown();
    // 3 block rows plus one divider rule at the packed-row boundary
    assert_eq!(line_count(&rendered), 4);
}

#[test]
fn test_subgrid_divider_falls_on_subtable_boundary() {
    let tall = Table::new(vec![vec![1, 2], vec![3, 4]]);
    let short = Table::new(vec![vec![5]]);
    let other = Table::new(vec![vec![6]]);

    let rendered = subgrid(2, &[&tall, &short, &other]).as_markdown();
    let lines: Vec<&str> = rendered.lines().collect();
    // the first packed row is two lines tall, so the rule sits at index 2
    assert!(lines[2].contains("==="), "expected rule line, got {:?}", lines[2]);
    assert!(lines[0].contains("| 1 | 2 |"));
    assert!(lines[1].contains("| 3 | 4 |"));
    assert!(lines[3].contains("| 6 |"));
}

#[test]
fn test_subgrid_aligns_shorter_blocks_with_blank_lines() {
    let tall = Table::new(vec![vec![1], vec![2], vec![3]]);
    let short = Table::new(vec![vec![9]]);

    let rendered = subgrid(2, &[&tall, &short]).as_markdown();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    // every line is padded to the same width
    let widths: Vec<usize> = lines.iter().map(|line| line.chars().count()).collect();
    assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    // the short block only contributes content on the first line
    assert!(lines[0].contains("| 9 |"));
    assert!(!lines[1].contains("| 9 |"));
}

#[test]
fn test_subgrid_uses_composite_chrome() {
    let one = Table::new(vec![vec![1]]);
    let two = Table::new(vec![vec![2]]);
    let rendered = subgrid(2, &[&one, &two]).as_markdown();
    assert!(rendered.starts_with("|= "));
    assert!(rendered.contains(" =|= "));
    assert!(rendered.trim_end().ends_with(" =|"));
}

#[test]
fn test_subgrid_composes_tables_of_different_cell_types() {
    let numbers = Table::new(vec![vec![1, 2]]);
    let words = Table::new(vec![vec!["hi".to_owned()]]);
    let blocks: Vec<&dyn RenderBlock> = vec![&numbers, &words];
    let rendered = subgrid(1, &blocks).as_markdown();
    assert!(rendered.contains("| 1 | 2 |"));
    assert!(rendered.contains("| hi |"));
}

#[test]
fn test_subgrid_keeps_subtable_styling_embedded() {
    let styled = Table::new(vec![vec![1]]).row_codes(ansi::RED.fg, [1]);
    let plain = Table::new(vec![vec![2]]);
    let composite = subgrid(2, &[&styled, &plain]);
    assert!(composite.to_string().contains(ansi::RED.fg));
    assert!(!composite.as_markdown().contains(ansi::RED.fg));
}
