//! Tests for whole-tile canvas sizing

#[cfg(test)]
mod tests {
    use texture_generator::io::configuration::{MAX_JPEG_DIMENSION_PX, TextureConfig};
    use texture_generator::{ErrorKind, TextureError};
    use texture_generator::layout::{CanvasDimensions, compute_canvas};

    fn config(gap_mm: u32) -> TextureConfig {
        let mut config = TextureConfig::new("faces", "out.jpg");
        config.gap_width_mm = gap_mm;
        config
    }

    // Tests the 4 mm gap reference wall
    // Verified by flooring the tile counts
    #[test]
    fn test_reference_wall_with_gap() {
        let canvas = CanvasDimensions::compute(&config(4)).unwrap();

        assert_eq!((canvas.x_tiles, canvas.y_tiles), (35, 4));
        assert_eq!((canvas.width_px, canvas.height_px), (26986, 18202));
        assert_eq!((canvas.width_mm, canvas.height_mm), (7140, 4816));
    }

    // Tests the default configuration without gap
    // Verified by adding the gap twice per unit
    #[test]
    fn test_default_wall_without_gap() {
        let canvas = CanvasDimensions::compute(&config(0)).unwrap();

        assert_eq!((canvas.x_tiles, canvas.y_tiles), (35, 4));
        assert_eq!((canvas.width_px, canvas.height_px), (26457, 18142));
        assert_eq!((canvas.width_mm, canvas.height_mm), (7000, 4800));
    }

    // Tests canvases hold whole tile units and cover the requested size
    // Verified by rounding tile counts to nearest
    #[test]
    fn test_canvas_is_whole_units_and_large_enough() {
        let cases = [
            (96, 200, 1200, 4, 7000, 4000),
            (72, 150, 600, 3, 2500, 1800),
            (300, 90, 45, 2, 1000, 333),
            (150, 333, 77, 0, 999, 1001),
        ];

        for (dpi, length, width, gap, out_w, out_h) in cases {
            let mut config = config(gap);
            config.output_dpi = dpi;
            config.tile_length_mm = length;
            config.tile_width_mm = width;
            config.output_width_mm = out_w;
            config.output_height_mm = out_h;

            let canvas = compute_canvas(&config).unwrap();
            let metrics = canvas.metrics;
            let px_per_mm = metrics.units.px_per_mm();

            let exact_width = f64::from(canvas.x_tiles) * metrics.column_step();
            let exact_height = f64::from(canvas.y_tiles) * metrics.row_step();
            assert!((f64::from(canvas.width_px) - exact_width).abs() <= 0.5);
            assert!((f64::from(canvas.height_px) - exact_height).abs() <= 0.5);

            assert!(f64::from(canvas.width_px) + 0.5 >= f64::from(out_w) * px_per_mm);
            assert!(f64::from(canvas.height_px) + 0.5 >= f64::from(out_h) * px_per_mm);

            // One unit fewer would no longer cover the request
            assert!(f64::from(canvas.x_tiles - 1) * f64::from(length + gap) < f64::from(out_w));
            assert!(f64::from(canvas.y_tiles - 1) * f64::from(width + gap) < f64::from(out_h));
        }
    }

    // Tests an exact fit does not add an extra unit
    // Verified by always adding one to the tile count
    #[test]
    fn test_exact_fit_keeps_tile_count() {
        let mut config = config(0);
        config.output_width_mm = 1000;
        config.output_height_mm = 2400;

        let canvas = compute_canvas(&config).unwrap();
        assert_eq!((canvas.x_tiles, canvas.y_tiles), (5, 2));
    }

    // Tests the JPEG side limit applies to each axis of the canvas
    // Verified by comparing against the limit inclusively on one side only
    #[test]
    fn test_ensure_exportable() {
        assert!(compute_canvas(&config(4)).unwrap().ensure_exportable().is_ok());

        let mut wide = config(0);
        wide.output_width_mm = 20000;
        let canvas = compute_canvas(&wide).unwrap();
        assert!(canvas.width_px > MAX_JPEG_DIMENSION_PX);
        match canvas.ensure_exportable() {
            Err(TextureError::InvalidConfig { field, .. }) => assert_eq!(field, "OutputWidth"),
            other => unreachable!("Expected InvalidConfig, got {other:?}"),
        }

        let mut tall = config(0);
        tall.output_dpi = 300;
        tall.output_height_mm = 6000;
        let canvas = compute_canvas(&tall).unwrap();
        assert!(canvas.height_px > MAX_JPEG_DIMENSION_PX);
        assert_eq!(canvas.ensure_exportable().unwrap_err().kind(), ErrorKind::Config);
    }

    // Tests pixel area helper
    // Verified by using u32 multiplication
    #[test]
    fn test_area() {
        let canvas = compute_canvas(&config(4)).unwrap();
        assert_eq!(canvas.area(), 26986_u64 * 18202);
    }

    // Tests zero DPI is a configuration error
    // Verified by skipping unit validation
    #[test]
    fn test_zero_dpi_rejected() {
        let mut config = config(0);
        config.output_dpi = 0;
        assert_eq!(compute_canvas(&config).unwrap_err().kind(), ErrorKind::Config);
    }
}
