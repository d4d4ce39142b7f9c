//! ASCII-grid route rendering.

use crate::models::{CostModel, RouteResult};

/// Draws a route as a character grid.
///
/// Each point's label sits on the diagonal of a (2N+1)×(2N+1) grid; every
/// leg of the route is drawn as a run of `\` between the two labels with
/// the leg's travel time at the midpoint. The output is a plain string,
/// one grid row per line.
///
/// # Examples
///
/// ```
/// use delivery_routing::io::parse_model;
/// use delivery_routing::render::render_ascii;
/// use delivery_routing::solver::nearest_neighbor;
///
/// let model = parse_model("A,B\n0,4\n4,0\n").expect("well-formed");
/// let route = nearest_neighbor(&model, 0).expect("valid start");
/// let grid = render_ascii(&model, &route);
/// assert!(grid.contains('A'));
/// assert!(grid.contains('B'));
/// assert!(grid.contains('4'));
/// ```
pub fn render_ascii(model: &CostModel, route: &RouteResult) -> String {
    let n = model.len();
    let dim = 2 * n + 1;
    let mut grid = vec![vec![" ".to_string(); dim]; dim];

    for i in 0..n {
        grid[2 * i + 1][2 * i + 1] = model.label(i).to_string();
    }

    for leg in route.sequence().windows(2) {
        let (from, to) = (leg[0], leg[1]);
        if from == to {
            // Only the single-point tour produces this; nothing to draw.
            continue;
        }

        let (from_row, from_col) = (2 * from + 1, 2 * from + 1);
        let (to_row, to_col) = (2 * to + 1, 2 * to + 1);

        // Labels all sit on the grid diagonal, so every leg runs diagonally.
        let row_step: isize = if from_row < to_row { 1 } else { -1 };
        let col_step: isize = if from_col < to_col { 1 } else { -1 };
        let mut row = from_row as isize + row_step;
        let mut col = from_col as isize + col_step;
        while row != to_row as isize && col != to_col as isize {
            grid[row as usize][col as usize] = "\\".to_string();
            row += row_step;
            col += col_step;
        }

        // Leg time at the midpoint overwrites part of the connector.
        let mid_row = (from_row + to_row) / 2;
        let mid_col = (from_col + to_col) / 2;
        grid[mid_row][mid_col] = model.time(from, to).to_string();
    }

    let mut out = String::new();
    for row in &grid {
        out.push_str(&row.concat());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_model;
    use crate::solver::nearest_neighbor;

    const FOUR_POINTS: &str = "A,B,C,D\n0,10,15,20\n10,0,35,25\n15,35,0,30\n20,25,30,0\n";

    #[test]
    fn test_grid_dimensions() {
        let model = parse_model(FOUR_POINTS).expect("well-formed");
        let route = nearest_neighbor(&model, 0).expect("valid start");
        let grid = render_ascii(&model, &route);
        assert_eq!(grid.lines().count(), 9);
    }

    #[test]
    fn test_diagonal_drawing() {
        let model = parse_model(FOUR_POINTS).expect("well-formed");
        let route = nearest_neighbor(&model, 0).expect("valid start");
        let grid = render_ascii(&model, &route);
        let rows: Vec<&str> = grid.lines().collect();
        // Endpoints of the tour keep their labels; cells between them hold
        // connectors and leg times (later legs overwrite earlier cells).
        assert_eq!(&rows[1][1..2], "A");
        assert_eq!(&rows[7][7..8], "D");
        assert!(grid.contains('\\'));
        // Leg times that survive along 0 -> 1 -> 3 -> 2 -> 0.
        for time in ["15", "25", "30"] {
            assert!(grid.contains(time), "missing leg time {time}");
        }
    }

    #[test]
    fn test_single_point_tour() {
        let model = parse_model("A\n0\n").expect("well-formed");
        let route = nearest_neighbor(&model, 0).expect("valid start");
        let grid = render_ascii(&model, &route);
        assert_eq!(grid.lines().count(), 3);
        assert!(grid.contains('A'));
        assert!(!grid.contains('\\'));
    }
}
