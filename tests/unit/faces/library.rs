//! Tests for face orientation, flipped variants and directory loading

#[cfg(test)]
mod tests {
    use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use texture_generator::ErrorKind;
    use texture_generator::faces::{Face, FacePool};

    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
    const GREEN: Rgb<u8> = Rgb([0, 255, 0]);

    fn solid(width: u32, height: u32, color: Rgb<u8>) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, color))
    }

    fn write_png(dir: &Path, name: &str, width: u32, height: u32, color: Rgb<u8>) {
        RgbImage::from_pixel(width, height, color)
            .save(dir.join(name))
            .unwrap();
    }

    // Tests portrait images become landscape with swapped dimensions
    // Verified by skipping the rotation
    #[test]
    fn test_portrait_face_rotated_clockwise() {
        let mut portrait = RgbImage::new(1, 2);
        portrait.put_pixel(0, 0, RED);
        portrait.put_pixel(0, 1, BLUE);

        let face = Face::new(portrait);

        assert_eq!((face.width(), face.height()), (2, 1));
        // Top of the source ends up on the right
        assert_eq!(*face.image().get_pixel(1, 0), RED);
        assert_eq!(*face.image().get_pixel(0, 0), BLUE);
    }

    // Tests landscape and square images are kept as they are
    // Verified by rotating unconditionally
    #[test]
    fn test_landscape_face_unchanged() {
        let landscape = RgbImage::from_pixel(4, 2, GREEN);
        let face = Face::new(landscape.clone());
        assert_eq!(face.image(), &landscape);

        let square = Face::new(RgbImage::from_pixel(3, 3, GREEN));
        assert_eq!((square.width(), square.height()), (3, 3));
    }

    // Tests the flipped variant is a point reflection with the same size
    // Verified by using a horizontal mirror instead
    #[test]
    fn test_flipped_face_is_point_reflection() {
        let mut image = RgbImage::from_pixel(2, 2, GREEN);
        image.put_pixel(0, 0, RED);
        let face = Face::new(image);

        let flipped = face.flipped();

        assert_eq!((flipped.width(), flipped.height()), (2, 2));
        assert_eq!(*flipped.image().get_pixel(1, 1), RED);
        assert_eq!(*flipped.image().get_pixel(0, 0), GREEN);
    }

    // Tests pool size is N without flipping and 2N with flipping
    // Verified by always adding the flipped variant
    #[test]
    fn test_pool_size_depends_on_flip() {
        let images = vec![solid(4, 2, RED), solid(2, 4, BLUE), solid(3, 3, GREEN)];

        let plain = FacePool::from_images(images.clone(), false).unwrap();
        assert_eq!(plain.len(), 3);

        let flipped = FacePool::from_images(images, true).unwrap();
        assert_eq!(flipped.len(), 6);
        assert!(!flipped.is_empty());
    }

    // Tests every pooled face is landscape
    // Verified by skipping normalization in from_images
    #[test]
    fn test_pool_faces_are_landscape() {
        let images = vec![solid(10, 30, RED), solid(30, 10, BLUE), solid(5, 6, GREEN)];
        let pool = FacePool::from_images(images, true).unwrap();

        for face in pool.faces() {
            assert!(face.width() >= face.height());
        }
    }

    // Tests flipped variants directly follow their source face
    // Verified by appending all flipped faces at the end
    #[test]
    fn test_pool_order_is_stable() {
        let pool = FacePool::from_images(vec![solid(2, 1, RED), solid(2, 1, BLUE)], true).unwrap();

        let colors: Vec<Rgb<u8>> = pool
            .faces()
            .iter()
            .map(|face| *face.image().get_pixel(0, 0))
            .collect();
        assert_eq!(colors, vec![RED, RED, BLUE, BLUE]);
        assert!(pool.get(4).is_none());
    }

    // Tests an empty image list is a load error
    // Verified by returning an empty pool
    #[test]
    fn test_empty_image_list_rejected() {
        let error = FacePool::from_images(Vec::new(), true).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Load);
    }

    // Tests directory images load in file name order
    // Verified by removing the sort
    #[test]
    fn test_load_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        write_png(dir.path(), "b.png", 4, 2, BLUE);
        write_png(dir.path(), "a.png", 4, 2, RED);
        write_png(dir.path(), "c.png", 2, 4, GREEN);

        let pool = FacePool::load(dir.path(), false).unwrap();

        assert_eq!(pool.len(), 3);
        let colors: Vec<Rgb<u8>> = pool
            .faces()
            .iter()
            .map(|face| *face.image().get_pixel(0, 0))
            .collect();
        assert_eq!(colors, vec![RED, BLUE, GREEN]);
        assert_eq!(pool.get(2).map(|face| (face.width(), face.height())), Some((4, 2)));
    }

    // Tests files without an image extension and subdirectories are skipped
    // Verified by decoding every directory entry
    #[test]
    fn test_load_skips_non_image_files() {
        let dir = TempDir::new().unwrap();
        write_png(dir.path(), "face.png", 4, 2, RED);
        fs::write(dir.path().join("notes.txt"), "not an image").unwrap();
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let pool = FacePool::load(dir.path(), true).unwrap();
        assert_eq!(pool.len(), 2);
    }

    // Tests a missing directory is a load error
    // Verified by treating read failures as empty directories
    #[test]
    fn test_load_missing_directory() {
        let dir = TempDir::new().unwrap();
        let error = FacePool::load(&dir.path().join("missing"), true).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Load);
    }

    // Tests a directory without images is a load error
    // Verified by removing the empty check
    #[test]
    fn test_load_empty_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("readme.md"), "faces go here").unwrap();

        let error = FacePool::load(dir.path(), true).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Load);
        assert!(error.to_string().contains("No tile face images"));
    }

    // Tests an undecodable image fails the whole load
    // Verified by skipping files that fail to decode
    #[test]
    fn test_load_corrupt_image() {
        let dir = TempDir::new().unwrap();
        write_png(dir.path(), "good.png", 4, 2, RED);
        fs::write(dir.path().join("broken.png"), b"definitely not a png").unwrap();

        let error = FacePool::load(dir.path(), true).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Load);
        assert!(error.to_string().contains("broken.png"));
    }
}
