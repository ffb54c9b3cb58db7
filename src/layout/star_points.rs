//! Star points (hoshi) for a board of any size.

use super::Intersection;

/// Conventional star points for a `columns × rows` board.
///
/// Boards narrower than 7 on either axis have none. Otherwise the four
/// corner points sit 3 lines in from the edge on axes of 13 or more and 2
/// lines in below that. Odd×odd boards add the center, and odd×odd boards of
/// 15 or more on both axes add the four edge midpoints.
pub fn star_points(columns: u32, rows: u32) -> Vec<Intersection> {
    if columns < 7 || rows < 7 {
        return vec![];
    }

    let offset = |size: u32| if size >= 13 { 3 } else { 2 };
    let (ox, oy) = (offset(columns), offset(rows));
    let (left, right) = (ox, columns - 1 - ox);
    let (top, bottom) = (oy, rows - 1 - oy);

    let mut points = vec![
        Intersection::new(left, top),
        Intersection::new(right, top),
        Intersection::new(left, bottom),
        Intersection::new(right, bottom),
    ];

    let both_odd = columns % 2 == 1 && rows % 2 == 1;
    if both_odd {
        let (cx, cy) = (columns / 2, rows / 2);
        points.push(Intersection::new(cx, cy));
        if columns >= 15 && rows >= 15 {
            points.extend([
                Intersection::new(cx, top),
                Intersection::new(cx, bottom),
                Intersection::new(left, cy),
                Intersection::new(right, cy),
            ]);
        }
    }

    points
}
