//! Tests for stitching gallery tiles into a square canvas

#[cfg(test)]
mod tests {
    use crate::support::{
        close_to, write_gallery, write_sized_files, write_solid_image, write_solid_jpeg,
    };
    use gallerytile::GalleryError;
    use gallerytile::gallery::compositor::{CompositorConfig, composite, write_composite};
    use gallerytile::gallery::sampler::{SamplerConfig, build_gallery};
    use gallerytile::gallery::selection::SortOrder;
    use gallerytile::io::progress::CellProgress;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const RED: [u8; 3] = [250, 10, 10];
    const GREEN: [u8; 3] = [10, 250, 10];
    const BLUE: [u8; 3] = [10, 10, 250];
    const WHITE: [u8; 3] = [250, 250, 250];

    fn quadrant_color(row: u32, col: u32) -> [u8; 3] {
        match (row, col) {
            (0, 0) => RED,
            (0, _) => GREEN,
            (_, 0) => BLUE,
            _ => WHITE,
        }
    }

    fn config(base_dir: &Path, dim: u32, factor: u32) -> CompositorConfig {
        CompositorConfig {
            base_dir: base_dir.to_path_buf(),
            dim,
            factor,
            output: base_dir.join("thumb.jpg"),
        }
    }

    // Tests that the canvas is dim × dim whatever the factor
    // Verified by sizing the canvas as tile_dim * factor
    #[test]
    fn test_canvas_is_always_dim_square() {
        let temp_dir = TempDir::new().unwrap();
        for factor in [1, 3, 7] {
            write_gallery(temp_dir.path(), factor, |_, _| GREEN);
        }

        for (dim, factor) in [(10, 1), (10, 3), (50, 7), (3, 7)] {
            let cells = (factor * factor) as usize;
            let canvas =
                composite(&config(temp_dir.path(), dim, factor), &CellProgress::hidden(cells))
                    .unwrap();
            assert_eq!(canvas.dimensions(), (dim, dim), "dim {dim} factor {factor}");
        }
    }

    // Tests tile placement at (col * tile_dim, row * tile_dim) with clipping
    // Verified by swapping row and col offsets
    #[test]
    fn test_tiles_pasted_at_grid_offsets() {
        let temp_dir = TempDir::new().unwrap();
        write_gallery(temp_dir.path(), 2, quadrant_color);

        let progress = CellProgress::hidden(4);
        let canvas = composite(&config(temp_dir.path(), 10, 2), &progress).unwrap();

        assert_eq!(progress.position(), 4);
        assert!(close_to(*canvas.get_pixel(0, 0), RED, 12));
        assert!(close_to(*canvas.get_pixel(5, 5), RED, 12));
        assert!(close_to(*canvas.get_pixel(6, 0), GREEN, 12));
        assert!(close_to(*canvas.get_pixel(0, 6), BLUE, 12));
        // Overhanging corner tile is clipped at the canvas edge
        assert!(close_to(*canvas.get_pixel(9, 9), WHITE, 12));
    }

    // Tests that a missing tile aborts without writing output
    // Verified by substituting a blank tile on open failure
    #[test]
    fn test_missing_tile_fails_without_output() {
        let temp_dir = TempDir::new().unwrap();
        write_gallery(temp_dir.path(), 2, quadrant_color);
        let missing = temp_dir.path().join("2").join("1").join("0.jpg");
        fs::remove_file(&missing).unwrap();

        let cfg = config(temp_dir.path(), 10, 2);
        let result = write_composite(&cfg, &CellProgress::hidden(4));

        match result {
            Err(GalleryError::ImageLoad { path, .. }) => assert_eq!(path, missing),
            other => unreachable!("Expected ImageLoad error, got {other:?}"),
        }
        assert!(!cfg.output.exists());
    }

    // Tests that a tile that is not an image aborts the composite
    // Verified by skipping undecodable tiles
    #[test]
    fn test_undecodable_tile_fails() {
        let temp_dir = TempDir::new().unwrap();
        write_gallery(temp_dir.path(), 1, quadrant_color);
        fs::write(temp_dir.path().join("1").join("0").join("0.jpg"), b"not a jpeg").unwrap();

        let result = composite(&config(temp_dir.path(), 10, 1), &CellProgress::hidden(1));

        assert!(matches!(result, Err(GalleryError::ImageLoad { .. })));
    }

    // Tests that a zero canvas dimension is rejected before any tile is read
    // Verified by removing dim validation
    #[test]
    fn test_zero_dim_fails() {
        let temp_dir = TempDir::new().unwrap();

        let result = composite(&config(temp_dir.path(), 0, 2), &CellProgress::hidden(4));

        assert!(matches!(result, Err(GalleryError::InvalidParameter { .. })));
    }

    // Tests the sampler-to-compositor round trip on four small images
    // Verified by writing the composite as PNG
    #[test]
    fn test_round_trip_with_sampler() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join("src");
        let base = temp_dir.path().join("gallery");
        for (index, (side, color)) in [(4, RED), (8, GREEN), (16, BLUE), (32, WHITE)]
            .into_iter()
            .enumerate()
        {
            write_solid_jpeg(&folder.join(format!("img_{index}.jpg")), side, side, color);
        }

        let sampler = SamplerConfig {
            base_dir: base.clone(),
            folder,
            factor: 2,
            order: SortOrder::Ascending,
            seed: None,
        };
        build_gallery(&sampler, &CellProgress::hidden(4)).unwrap();

        let cfg = CompositorConfig {
            base_dir: base,
            dim: 10,
            factor: 2,
            output: temp_dir.path().join("out").join("default_tile_name.jpg"),
        };
        write_composite(&cfg, &CellProgress::hidden(4)).unwrap();

        assert_eq!(image::image_dimensions(&cfg.output).unwrap(), (10, 10));
        let format = image::ImageReader::open(&cfg.output)
            .unwrap()
            .with_guessed_format()
            .unwrap()
            .format();
        assert_eq!(format, Some(image::ImageFormat::Jpeg));
    }

    // Tests that a PNG copied under a .jpg name is decoded by its contents
    // Verified by choosing the decoder from the file extension
    #[test]
    fn test_png_source_decoded_by_content() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join("src");
        let base = temp_dir.path().join("gallery");
        write_solid_image(&folder.join("a.png"), 8, 8, BLUE, image::ImageFormat::Png);

        let sampler = SamplerConfig {
            base_dir: base.clone(),
            folder,
            factor: 1,
            order: SortOrder::Ascending,
            seed: None,
        };
        build_gallery(&sampler, &CellProgress::hidden(1)).unwrap();

        let canvas = composite(&config(&base, 10, 1), &CellProgress::hidden(1)).unwrap();

        assert_eq!(canvas.dimensions(), (10, 10));
        assert!(close_to(*canvas.get_pixel(0, 0), BLUE, 2));
        assert!(close_to(*canvas.get_pixel(9, 9), BLUE, 2));
    }

    // Tests that non-image sources copied by the sampler break the compositor
    // Verified by decoding sources in the sampler
    #[test]
    fn test_sampler_does_not_validate_images() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join("src");
        let base = temp_dir.path().join("gallery");
        write_sized_files(&folder, &[16]);

        let sampler = SamplerConfig {
            base_dir: base.clone(),
            folder,
            factor: 1,
            order: SortOrder::Ascending,
            seed: None,
        };
        build_gallery(&sampler, &CellProgress::hidden(1)).unwrap();

        let result = composite(&config(&base, 10, 1), &CellProgress::hidden(1));
        assert!(matches!(result, Err(GalleryError::ImageLoad { .. })));
    }
}
