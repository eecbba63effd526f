//! Integration tests for gravwell-math.

use gravwell_math::{FabricTransform, Plane, Quat, Ray, Vec3};

const TILT: f32 = -std::f32::consts::PI / 6.0;

fn approx(a: Vec3, b: Vec3, tol: f32) -> bool {
    (a - b).abs().max_element() < tol
}

fn sample_points() -> Vec<Vec3> {
    vec![
        Vec3::ZERO,
        Vec3::new(50.0, 0.0, 50.0),
        Vec3::new(-12.5, 7.0, 33.0),
        Vec3::new(3.0, -40.0, -21.0),
        Vec3::new(-49.0, 13.25, -0.5),
    ]
}

// ─── FabricTransform Tests ────────────────────────────────────

#[test]
fn identity_is_noop() {
    let t = FabricTransform::identity();
    let p = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(t.to_local(p), p);
    assert_eq!(t.to_world(p), p);
    assert_eq!(t.up(), Vec3::Y);
}

#[test]
fn local_world_round_trip() {
    let t = FabricTransform::new(
        Vec3::new(4.0, -2.0, 9.0),
        Quat::from_rotation_x(TILT) * Quat::from_rotation_y(0.3),
    );
    for p in sample_points() {
        assert!(approx(t.to_world(t.to_local(p)), p, 1e-3), "world round trip failed for {p}");
        assert!(approx(t.to_local(t.to_world(p)), p, 1e-3), "local round trip failed for {p}");
    }
}

#[test]
fn tilted_up_vector() {
    let t = FabricTransform::tilted(Vec3::ZERO, TILT);
    let up = t.up();
    assert!((up.length() - 1.0).abs() < 1e-6);
    assert!((up.y - TILT.cos()).abs() < 1e-6);
    assert!((up.z - TILT.sin()).abs() < 1e-6);
}

#[test]
fn tilt_angle_recovered() {
    let t = FabricTransform::tilted(Vec3::ZERO, TILT);
    assert!((t.tilt_angle() - TILT).abs() < 1e-5);
}

#[test]
fn setters_refresh_inverse() {
    let mut t = FabricTransform::identity();
    t.set_translation(Vec3::new(0.0, 10.0, 0.0));
    assert!(approx(t.to_local(Vec3::new(0.0, 10.0, 0.0)), Vec3::ZERO, 1e-6));

    t.set_rotation(Quat::from_rotation_x(TILT));
    let p = Vec3::new(5.0, 1.0, -3.0);
    assert!(approx(t.to_world(t.to_local(p)), p, 1e-4));
    assert_eq!(t.inverse_world_matrix(), t.world_matrix().inverse());
}

#[test]
fn vertical_projection_lands_on_rest_plane() {
    let t = FabricTransform::tilted(Vec3::new(0.0, 2.0, 0.0), TILT);
    let on_plane = t.vertical_projection(7.0, -12.0).unwrap();
    assert_eq!(on_plane.x, 7.0);
    assert_eq!(on_plane.z, -12.0);
    assert!(t.to_local(on_plane).y.abs() < 1e-4);
}

#[test]
fn vertical_projection_rejects_vertical_fabric() {
    let t = FabricTransform::tilted(Vec3::ZERO, std::f32::consts::FRAC_PI_2);
    assert!(t.vertical_projection(1.0, 1.0).is_none());
}

// ─── Ray / Plane Tests ────────────────────────────────────────

#[test]
fn ray_hits_plane_in_front() {
    let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y).unwrap();
    let plane = Plane::from_normal_and_point(Vec3::Y, Vec3::ZERO).unwrap();
    let hit = ray.intersect_plane(&plane).unwrap();
    assert!(approx(hit, Vec3::ZERO, 1e-6));
}

#[test]
fn ray_misses_plane_behind() {
    let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::Y).unwrap();
    let plane = Plane::from_normal_and_point(Vec3::Y, Vec3::ZERO).unwrap();
    assert!(ray.intersect_plane(&plane).is_none());
}

#[test]
fn parallel_ray_misses_plane() {
    let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X).unwrap();
    let plane = Plane::from_normal_and_point(Vec3::Y, Vec3::ZERO).unwrap();
    assert!(ray.intersect_plane(&plane).is_none());
}

#[test]
fn plane_distance_sign() {
    let plane = Plane::from_normal_and_point(Vec3::Y, Vec3::new(0.0, 3.0, 0.0)).unwrap();
    assert!((plane.distance_to_point(Vec3::new(9.0, 5.0, 1.0)) - 2.0).abs() < 1e-6);
    assert!(plane.distance_to_point(Vec3::ZERO) < 0.0);
}

#[test]
fn zero_direction_rejected() {
    assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_none());
    assert!(Plane::from_normal_and_point(Vec3::ZERO, Vec3::ONE).is_none());
}

#[test]
fn sphere_hit_distance() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z).unwrap();
    let t = ray.intersect_sphere(Vec3::ZERO, 2.0).unwrap();
    assert!((t - 8.0).abs() < 1e-5);
}

#[test]
fn sphere_miss() {
    let ray = Ray::new(Vec3::new(5.0, 0.0, 10.0), Vec3::NEG_Z).unwrap();
    assert!(ray.intersect_sphere(Vec3::ZERO, 2.0).is_none());
}

#[test]
fn sphere_behind_origin_missed() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z).unwrap();
    assert!(ray.intersect_sphere(Vec3::ZERO, 2.0).is_none());
}

#[test]
fn ray_serialization() {
    let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::X).unwrap();
    let json = serde_json::to_string(&ray).unwrap();
    let recovered: Ray = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, ray);
}
