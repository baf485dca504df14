//! Marker sampler: every marker combination in every palette color.

use vellum::{
    DrawError,
    color::{Class, Color},
    draw::{
        Alignment, HorizontalAlignment, Line, LineMarkers, LineProps, MarkerKind, Polygon,
        ShapeProps, Text, TextProps, VerticalAlignment, VisualElement,
    },
    geometry::Point,
};

const ROW_HEIGHT: f64 = 36.0;
const TOP: f64 = 30.0;
const SWATCH_X: f64 = 30.0;
const SWATCH_RADIUS: f64 = 10.0;
const NAME_X: f64 = 52.0;
const FIRST_LINE_X: f64 = 150.0;
const LINE_LENGTH: f64 = 64.0;
const LINE_SPACING: f64 = 96.0;

const COMBINATIONS: [LineMarkers; 6] = [
    LineMarkers::none(),
    LineMarkers::end(MarkerKind::Arrow),
    LineMarkers::both(MarkerKind::Arrow),
    LineMarkers::end(MarkerKind::Dot),
    LineMarkers::both(MarkerKind::Dot),
    LineMarkers::new(Some(MarkerKind::Dot), Some(MarkerKind::Arrow)),
];

fn swatch(center: Point, color: Color) -> Result<Polygon, DrawError> {
    let r = SWATCH_RADIUS;
    Polygon::new(
        vec![
            center.add_point(Point::new(0.0, -r)),
            center.add_point(Point::new(r, 0.0)),
            center.add_point(Point::new(0.0, r)),
            center.add_point(Point::new(-r, 0.0)),
        ],
        ShapeProps::new(color).with_class(Class::Filled),
    )
}

pub(super) fn build() -> Result<Vec<VisualElement>, DrawError> {
    let mut elements = Vec::new();
    let name_alignment = Alignment::new(HorizontalAlignment::Left, VerticalAlignment::Center);

    for (row, color) in Color::ALL.into_iter().enumerate() {
        let y = TOP + ROW_HEIGHT * row as f64;

        elements.push(swatch(Point::new(SWATCH_X, y), color)?.into());
        elements.push(
            Text::new(
                &[color.class_name()],
                Point::new(NAME_X, y),
                TextProps::new(color)
                    .with_class(Class::Mono)
                    .with_alignment(name_alignment),
            )?
            .into(),
        );

        for (column, markers) in COMBINATIONS.into_iter().enumerate() {
            let x = FIRST_LINE_X + LINE_SPACING * column as f64;
            let line = Line::new(
                Point::new(x, y),
                Point::new(x + LINE_LENGTH, y),
                LineProps::new(color).with_markers(markers),
            )?
            .shorten(markers.start_offset(), markers.end_offset())?;
            elements.push(line.into());
        }
    }

    Ok(elements)
}
