//! Cross-module properties: conversions, alignment, and sampling working
//! together the way perception callers chain them.

use pose_core::align::rotation_onto;
use pose_core::pose::random_pose;
use pose_core::{Matrix3, Quaternion, Vector3};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_random_orientations_convert_to_proper_matrices() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..50 {
        let q = Quaternion::random(&mut rng);
        let r = q.to_rotation_matrix();
        assert!(r.is_rotation_matrix(1e-12), "improper rotation from {}", q);

        let product = r * r.transpose();
        assert!(product.max_difference(&Matrix3::identity()) < 1e-12);
    }
}

#[test]
fn test_alignment_agrees_with_quaternion_matrix_path() {
    // Build an orientation from Euler angles, rotate the x axis with it,
    // then recover a rotation mapping x onto the rotated direction.
    let q = Quaternion::from_euler(Vector3::new(0.2, 0.5, -1.0));
    let target = q.to_rotation_matrix() * Vector3::x_axis();

    let r = rotation_onto(Vector3::x_axis(), target).unwrap();
    let aligned = r * Vector3::x_axis();

    assert!(
        aligned.dot(&target) > 1.0 - 1e-9,
        "alignment missed target: {} vs {}",
        aligned,
        target
    );
}

#[test]
fn test_rotation_vector_survives_matrix_round_trip() {
    // quaternion -> rotation vector and quaternion -> matrix must describe
    // the same rotation: rotating the axis by the matrix leaves it fixed.
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..25 {
        let q = Quaternion::random(&mut rng);
        let rotvec = q.to_rotation_vector();
        if rotvec.magnitude() < 1e-6 {
            continue;
        }

        let axis = rotvec.normalize().unwrap();
        let rotated_axis = q.to_rotation_matrix() * axis;
        assert!(
            axis.dot(&rotated_axis) > 1.0 - 1e-10,
            "rotation moved its own axis: {}",
            q
        );
    }
}

#[test]
fn test_sampled_poses_are_usable_downstream() {
    let mut rng = StdRng::seed_from_u64(55);

    for _ in 0..20 {
        let pose = random_pose(-10.0, 10.0, &mut rng);

        // Position lands in range.
        for i in 0..3 {
            assert!(pose.position[i] >= -10.0 && pose.position[i] <= 10.0);
        }

        // Orientation feeds straight into the conversion pipeline.
        let r = pose.orientation.to_rotation_matrix();
        assert!(r.is_rotation_matrix(1e-12));

        let rpy = pose.orientation.to_euler();
        let back = Quaternion::from_euler(rpy);
        // Compare as rotations (double cover: q and -q are equivalent).
        assert!(back.to_rotation_matrix().max_difference(&r) < 1e-10);
    }
}

#[test]
fn test_clip_norm_then_align_pipeline() {
    // A saturated command vector still aligns correctly: clipping preserves
    // direction, so the alignment built from the clipped vector matches.
    let raw = Vector3::new(30.0, 40.0, 0.0);
    let clipped = raw.clip_norm(0.1, 1.0).unwrap();

    let r_raw = rotation_onto(raw, Vector3::z_axis()).unwrap();
    let r_clipped = rotation_onto(clipped, Vector3::z_axis()).unwrap();

    assert!(r_raw.max_difference(&r_clipped) < 1e-12);
}

#[test]
fn test_skew_feeds_rodrigues() {
    // The skew/deskew pair is the bridge between vectors and the Rodrigues
    // construction; a full trip through both stays consistent.
    let v = Vector3::new(0.4, -1.1, 2.2);
    let k = Matrix3::skew_symmetric(v);
    assert_eq!(k.deskew(), v);

    for x in [Vector3::x_axis(), Vector3::new(2.0, 3.0, -1.0)] {
        let diff = k * x - v.cross(&x);
        assert!(diff.magnitude() < 1e-14);
    }
}
