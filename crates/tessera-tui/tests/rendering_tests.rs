use tessera_tui::widget::builtin::{Grid, Label, LinearBox};
use tessera_tui::{Painter, Rect, Size, TestSurface, Theme, Widget};

fn render(widget: &mut dyn Widget, width: u16, height: u16) -> TestSurface {
    let mut surface = TestSurface::new(width, height);
    let theme = Theme::new();
    Painter::new(&mut surface, &theme).repaint(widget).unwrap();
    surface
}

#[test]
fn test_bordered_box_with_labels() {
    let mut b = LinearBox::horizontal()
        .with(Label::new("test"))
        .with(Label::new("foo"))
        .bordered();

    let surface = render(&mut b, 10, 5);
    assert_eq!(
        surface.to_string(),
        "┌────────┐\n│testfoo │\n│        │\n│        │\n└────────┘\n"
    );
}

#[test]
fn test_grid_stretch_ratio() {
    let mut grid = Grid::new(3, 1).bordered();
    grid.set_column_stretch(0, 1);
    grid.set_column_stretch(1, 2);
    grid.set_column_stretch(2, 1);

    // Four border cells around three columns leave an interior of 22
    render(&mut grid, 26, 3);
    assert_eq!(grid.column_widths(), &[6, 11, 5]);

    render(&mut grid, 24, 3);
    assert_eq!(grid.column_widths(), &[5, 10, 5]);
}

#[test]
fn test_relayout_is_deterministic() {
    let build = || {
        LinearBox::vertical()
            .with(Label::new("one"))
            .with(LinearBox::horizontal().with(Label::new("a")).with(Label::new("bb")))
            .bordered()
    };
    let mut first = build();
    let mut second = build();

    let a = render(&mut first, 9, 6).to_string();
    let b = render(&mut second, 9, 6).to_string();
    let again = render(&mut first, 9, 6).to_string();
    assert_eq!(a, b);
    assert_eq!(a, again);
}

#[test]
fn test_layout_sums_to_space() {
    let mut b = LinearBox::horizontal()
        .with(Label::new("abc"))
        .with(Label::new("defgh"))
        .with(Label::new("i"));

    for width in 0..20u16 {
        b.resize(Size::new(width, 1));
        let total: u16 = (0..b.len()).map(|i| b.child(i).unwrap().size().width).sum();
        assert_eq!(total, width, "width {width}");
    }
}

#[test]
fn test_nested_masks_clip_drawing() {
    let mut surface = TestSurface::new(6, 3);
    let theme = Theme::new();
    {
        let mut p = Painter::new(&mut surface, &theme);
        p.with_mask(Rect::new(1, 0, 4, 3), |p| {
            p.translate(2, 1);
            p.with_mask(Rect::new(-1, 0, 10, 1), |p| {
                p.draw_text(-3, 0, "abcdefgh");
                p.draw_text(0, 1, "hidden");
            });
            p.restore();
        });
        p.flush().unwrap();
    }
    assert_eq!(surface.to_string(), "      \n cdef \n      \n");
}

#[test]
fn test_wide_runes_in_label() {
    let surface = render(&mut Label::new("日本x"), 6, 1);
    assert_eq!(surface.row(0), "日本x ");
}
