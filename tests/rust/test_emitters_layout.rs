use super::*;

#[test]
fn test_first_node_at_origin() {
    let g = row_position(0, &EmitConfig::default());
    assert_eq!(g, Geometry::new(50, 50, 120, 60));
}

#[test]
fn test_row_spacing() {
    let config = EmitConfig::default();
    let xs: Vec<i64> = (0..4).map(|i| row_position(i, &config).x).collect();
    assert_eq!(xs, vec![50, 200, 350, 500]);
    assert!((0..4).all(|i| row_position(i, &config).y == 50));
}

#[test]
fn test_custom_config() {
    let config = EmitConfig {
        node_width: 80,
        node_height: 40,
        origin_x: 0,
        origin_y: 10,
        spacing_x: 100,
        indent: None,
    };
    assert_eq!(row_position(2, &config), Geometry::new(200, 10, 80, 40));
}
