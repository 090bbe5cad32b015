use indexmap::IndexMap;
use textgrid::{ansi, Table, SPAN_MARKER};

fn keyed_table() -> Table<i32> {
    let mut data = IndexMap::new();
    for (row, x, y) in [("a", 1, 2), ("b", 3, 4)] {
        let mut inner = IndexMap::new();
        inner.insert("x".to_owned(), x);
        inner.insert("y".to_owned(), y);
        data.insert(row.to_owned(), inner);
    }
    Table::new(data)
}

fn stripped_lines(table: &impl ToString) -> Vec<String> {
    ansi::strip(&table.to_string())
        .lines()
        .map(str::to_owned)
        .collect()
}

// ============================================================================
// Rendering scenarios
// ============================================================================

#[test]
fn test_basic_grid_renders_without_labels() {
    let table = Table::new(vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(stripped_lines(&table), vec!["| 1 | 2 |", "| 3 | 4 |"]);
}

#[test]
fn test_keyed_axes_render_header_and_row_labels() {
    let table = keyed_table();
    assert_eq!(
        stripped_lines(&table),
        vec![
            "| - || x | y |",
            "| = || = | = |",
            "| a || 1 | 2 |",
            "| b || 3 | 4 |",
        ]
    );
}

#[test]
fn test_column_divider_uses_wide_separator_at_that_boundary_only() {
    let table = Table::new(vec![vec!["a", "b", "c"]]).divider_after_cols([1]);
    assert_eq!(stripped_lines(&table), vec!["| a || b | c |"]);
}

#[test]
fn test_row_divider_inserts_full_width_rule() {
    let table = Table::new(vec![vec![1, 2], vec![3, 4]]).divider_after_rows([1]);
    assert_eq!(
        stripped_lines(&table),
        vec!["| 1 | 2 |", "| ===== |", "| 3 | 4 |"]
    );
}

#[test]
fn test_span_widens_columns_until_content_fits() {
    let table = Table::new(vec![
        vec!["abcdefgh".to_owned(), SPAN_MARKER.to_owned(), "c".to_owned()],
        vec!["x".to_owned(), "y".to_owned(), "z".to_owned()],
    ]);
    let lines = stripped_lines(&table);
    assert!(lines[0].contains("abcdefgh"));
    // no truncation, and every line stays aligned to the same width
    assert_eq!(lines[0].chars().count(), lines[1].chars().count());
}

#[test]
fn test_span_occupies_columns_through_the_wide_divider() {
    let table = Table::new(vec![
        vec!["wide".to_owned(), SPAN_MARKER.to_owned()],
        vec!["a".to_owned(), "b".to_owned()],
    ])
    .divider_after_cols([1]);
    let lines = stripped_lines(&table);
    assert!(lines[0].contains("wide"));
    assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    // the lower row still renders the wide separator at the boundary
    assert!(lines[1].contains(" || "));
}

// ============================================================================
// Width properties
// ============================================================================

#[test]
fn test_no_cell_is_ever_truncated() {
    let cells = vec![
        vec!["short".to_owned(), "a-much-longer-value".to_owned()],
        vec!["tiny".to_owned(), "x".to_owned()],
    ];
    let table = Table::new(cells.clone());
    let rendered = table.as_markdown();
    for row in &cells {
        for value in row {
            assert!(rendered.contains(value.as_str()), "missing {value}");
        }
    }
}

#[test]
fn test_column_width_covers_labels_and_values() {
    let mut data = IndexMap::new();
    let mut inner = IndexMap::new();
    inner.insert("a-long-column-label".to_owned(), 1);
    data.insert("row".to_owned(), inner);
    let table = Table::new(data);
    let lines = stripped_lines(&table);
    assert!(lines[0].contains("a-long-column-label"));
    // all lines align despite the label dominating the width
    let widths: Vec<usize> = lines.iter().map(|line| line.chars().count()).collect();
    assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
}

// ============================================================================
// Styling
// ============================================================================

#[test]
fn test_markdown_equals_stripped_rendering() {
    let table = keyed_table();
    assert_eq!(table.as_markdown(), ansi::strip(&table.to_string()));
    // stripping is idempotent
    assert_eq!(ansi::strip(&table.as_markdown()), table.as_markdown());
}

#[test]
fn test_default_styling_wraps_cells_in_reset_pair() {
    let table = Table::new(vec![vec![1]]);
    let rendered = table.to_string();
    assert!(rendered.contains(ansi::DEFAULT_FG));
    assert!(rendered.contains(ansi::DEFAULT_BG));
    assert!(rendered.ends_with(ansi::RESET));
}

#[test]
fn test_row_and_cell_styling_precedence_in_output() {
    let table = Table::new(vec![vec![1, 2], vec![3, 4]])
        .row_codes(ansi::RED.fg, [1])
        .cell_overrides(ansi::CYAN.bg, [(1, 1)]);
    let rendered = table.to_string();
    // cell (1,1) carries only its override; (1,2) the row code
    assert!(rendered.contains(&format!("{}1", ansi::CYAN.bg)));
    assert!(rendered.contains(&format!("{}{}2", ansi::RED.fg, ansi::DEFAULT_BG)));
}

#[test]
fn test_value_override_styles_matching_cells_anywhere() {
    let table = Table::new(vec![vec![7, 1], vec![2, 7]])
        .value_override("7", ansi::MAGENTA.bg);
    let rendered = table.to_string();
    assert_eq!(rendered.matches(ansi::MAGENTA.bg).count(), 2);
}

#[test]
fn test_console_mode_colors_by_value_kind() {
    let numbers = Table::console(vec![vec![1, 2]]);
    assert!(numbers.to_string().contains(ansi::YELLOW.fg));

    let words = Table::console(vec![vec!["hi".to_owned()]]);
    assert!(words.to_string().contains(ansi::GREEN.fg));

    // explicit styling on the row suppresses the automatic token
    let styled = Table::console(vec![vec![1, 2]]).row_codes(ansi::RED.fg, [1]);
    assert!(!styled.to_string().contains(ansi::YELLOW.fg));
}

#[test]
fn test_colorize_cycles_backgrounds_with_contrasting_foregrounds() {
    let table = Table::new(vec![vec![1, 2, 3, 4, 5]]).colorize();
    let rendered = table.to_string();
    for code in [41, 42, 43, 44, 45] {
        assert!(rendered.contains(&ansi::sgr(code)), "missing bg {code}");
    }
    // black foreground on most backgrounds, white on the dark ones
    assert!(rendered.contains(&ansi::sgr(30)));
    assert!(rendered.contains(&ansi::sgr(37)));
}

// ============================================================================
// Chrome configuration
// ============================================================================

#[test]
fn test_custom_borders_and_dividers() {
    // the right border is the left border's characters reversed
    let table = Table::new(vec![vec![1, 2]])
        .left_border("<- ")
        .mid_divider(" ; ");
    assert_eq!(stripped_lines(&table), vec!["<- 1 ; 2 -<"]);
}

#[test]
fn test_custom_top_divider_shapes_rule_lines() {
    let table = Table::new(vec![vec![1], vec![2]])
        .top_divider("~")
        .divider_after_rows([1]);
    assert_eq!(stripped_lines(&table)[1], "| ~ |");
}
