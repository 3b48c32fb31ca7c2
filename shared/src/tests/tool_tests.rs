use super::*;

fn config() -> PadConfig {
    PadConfig::default()
}

#[test]
fn starts_in_draw_mode_with_defaults() {
    let state = ToolState::new(&config());
    assert_eq!(state.tool, Tool::Draw);
    assert_eq!(state.stroke_color, "#2c2c2c");
    assert_eq!(state.fill_color, "#2c2c2c");
    assert_eq!(state.line_width, 5.0);
    assert!(!state.stroke_active);
}

#[test]
fn draw_move_begins_path_until_pointer_is_down() {
    let mut state = ToolState::new(&config());
    let point = Point::new(12.0, 30.0);
    assert_eq!(state.pointer_move(point), Some(PaintOp::BeginPath(point)));

    state.pointer_down();
    assert_eq!(state.pointer_move(point), Some(PaintOp::LineTo(point)));

    state.pointer_up();
    assert_eq!(state.pointer_move(point), Some(PaintOp::BeginPath(point)));
}

#[test]
fn erase_clears_square_centred_on_pointer() {
    let config = config();
    let mut state = ToolState::new(&config);
    state.set_tool(Tool::Erase, &config);
    state.set_line_width(8.0, &config);
    assert_eq!(state.pointer_move(Point::new(20.0, 20.0)), None);

    state.pointer_down();
    assert_eq!(
        state.pointer_move(Point::new(20.0, 20.0)),
        Some(PaintOp::ClearRect {
            x: 16.0,
            y: 16.0,
            width: 8.0,
            height: 8.0,
        })
    );
}

#[test]
fn non_finite_points_are_dropped() {
    let mut state = ToolState::new(&config());
    state.pointer_down();
    assert_eq!(state.pointer_move(Point::new(f64::NAN, 1.0)), None);
    assert_eq!(state.pointer_move(Point::new(1.0, f64::INFINITY)), None);
}

#[test]
fn entering_draw_resets_stroke_color_only() {
    let config = config();
    let mut state = ToolState::new(&config);
    state.set_color("#ff0000".to_string(), &config);
    state.set_tool(Tool::Erase, &config);
    assert_eq!(state.stroke_color, "#ff0000");

    state.set_tool(Tool::Draw, &config);
    assert_eq!(state.stroke_color, "#2c2c2c");
    assert_eq!(state.fill_color, "#ff0000");
}

#[test]
fn line_width_is_clamped_to_range_bounds() {
    let config = config();
    let mut state = ToolState::new(&config);
    assert_eq!(state.set_line_width(0.0, &config), 1.0);
    assert_eq!(state.set_line_width(120.0, &config), 50.0);
    assert_eq!(state.set_line_width(f64::NAN, &config), 5.0);
    assert_eq!(state.set_line_width(7.5, &config), 7.5);
    assert_eq!(state.line_width, 7.5);
}

#[test]
fn sanitize_color_falls_back_and_truncates() {
    assert_eq!(sanitize_color(String::new(), "#2c2c2c"), "#2c2c2c");
    assert_eq!(sanitize_color("  ".to_string(), "#2c2c2c"), "#2c2c2c");
    assert_eq!(sanitize_color("#abcdef".to_string(), "#2c2c2c"), "#abcdef");
    let long = "x".repeat(40);
    assert_eq!(sanitize_color(long, "#2c2c2c").len(), 32);
}
