//! Integration tests for gravwell-interact.

use gravwell_interact::{
    ndc_from_cursor, pick_nearest, DragController, DragState, NavigationControl,
    PerspectiveCamera, RayCaster,
};
use gravwell_math::{Mat4, Ray, Vec2, Vec3};
use gravwell_solver::{FabricConfig, MassKind, MassSpec, SceneConfig, Simulation};
use gravwell_telemetry::{EventKind, VecSink};
use gravwell_types::MassId;

/// Looks straight down from high above; NDC maps linearly onto world X/Z.
struct TopDown {
    height: f32,
    extent: f32,
}

impl RayCaster for TopDown {
    fn ray(&self, ndc: Vec2) -> Option<Ray> {
        let origin = Vec3::new(ndc.x * self.extent, self.height, -ndc.y * self.extent);
        Ray::new(origin, Vec3::NEG_Y)
    }
}

/// Always returns the same ray.
struct Fixed(Ray);

impl RayCaster for Fixed {
    fn ray(&self, _ndc: Vec2) -> Option<Ray> {
        Some(self.0)
    }
}

#[derive(Default)]
struct Orbit {
    enabled: bool,
    toggles: u32,
}

impl NavigationControl for Orbit {
    fn set_navigation_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.toggles += 1;
    }
}

fn orbit() -> Orbit {
    Orbit { enabled: true, toggles: 0 }
}

fn top_down() -> TopDown {
    TopDown { height: 200.0, extent: 1000.0 }
}

fn flat_sim() -> Simulation {
    Simulation::from_config(SceneConfig {
        fabric: FabricConfig::flat(100.0, 10),
        seed: Some(1),
        ..Default::default()
    })
    .unwrap()
}

fn body(x: f32, z: f32, radius: f32) -> MassSpec {
    MassSpec {
        name: "body".into(),
        kind: MassKind::Collapsed,
        radius,
        mass: radius * 5.0,
        color: 0,
        position: Vec3::new(x, 10.0, z),
    }
}

// ─── Camera Tests ─────────────────────────────────────────────

#[test]
fn ndc_corners() {
    let viewport = Vec2::new(800.0, 600.0);
    assert_eq!(ndc_from_cursor(Vec2::ZERO, viewport), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(ndc_from_cursor(viewport, viewport), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(ndc_from_cursor(Vec2::new(400.0, 300.0), viewport), Some(Vec2::ZERO));
    assert_eq!(ndc_from_cursor(Vec2::ZERO, Vec2::new(0.0, 600.0)), None);
}

#[test]
fn center_ray_points_at_target() {
    let eye = Vec3::new(0.0, 50.0, 80.0);
    let camera = PerspectiveCamera::look_at(eye, Vec3::ZERO, Vec3::Y, 1.0, 16.0 / 9.0, 0.1, 1000.0);
    let ray = camera.ray(Vec2::ZERO).unwrap();
    assert!((ray.origin - eye).length() < 1e-5);
    let expected = (Vec3::ZERO - eye).normalize();
    assert!(ray.direction.dot(expected) > 0.9999);
}

#[test]
fn reverse_z_projection_works() {
    let eye = Vec3::new(0.0, 0.0, 10.0);
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    let projection = Mat4::perspective_infinite_reverse_rh(1.0, 1.0, 0.1);
    let camera = PerspectiveCamera::new(eye, (projection * view).inverse());
    let ray = camera.ray(Vec2::ZERO).unwrap();
    assert!(ray.direction.dot(Vec3::NEG_Z) > 0.9999);
}

#[test]
fn off_center_ray_leans_that_way() {
    let eye = Vec3::new(0.0, 0.0, 10.0);
    let camera = PerspectiveCamera::look_at(eye, Vec3::ZERO, Vec3::Y, 1.0, 1.0, 0.1, 100.0);
    let right = camera.ray(Vec2::new(0.5, 0.0)).unwrap();
    let up = camera.ray(Vec2::new(0.0, 0.5)).unwrap();
    assert!(right.direction.x > 0.0);
    assert!(up.direction.y > 0.0);
}

// ─── Picking Tests ────────────────────────────────────────────

#[test]
fn picks_nearest_of_stacked_bodies() {
    let mut sim = flat_sim();
    let far = sim.add(body(0.0, 0.0, 1.0)).unwrap();
    let near = sim.add(body(0.0, 30.0, 1.0)).unwrap();
    // Symmetric pair on a flat fabric: both rest at the same height.
    let y = sim.registry().find(far).unwrap().world_position().y;
    let ray = Ray::new(Vec3::new(0.0, y, 100.0), Vec3::NEG_Z).unwrap();

    let hit = pick_nearest(&ray, sim.registry()).unwrap();
    assert_eq!(hit.id, near);
    assert!((hit.distance - 69.0).abs() < 1e-3);
    assert!((hit.point.z - 31.0).abs() < 1e-3);
}

#[test]
fn pick_misses_return_none() {
    let mut sim = flat_sim();
    sim.add(body(0.0, 0.0, 1.0)).unwrap();
    let ray = Ray::new(Vec3::new(40.0, 100.0, 40.0), Vec3::NEG_Y).unwrap();
    assert!(pick_nearest(&ray, sim.registry()).is_none());

    let empty = flat_sim();
    let ray = Ray::new(Vec3::new(0.0, 100.0, 0.0), Vec3::NEG_Y).unwrap();
    assert!(pick_nearest(&ray, empty.registry()).is_none());
}

// ─── Drag Tests ───────────────────────────────────────────────

#[test]
fn miss_stays_idle() {
    let mut sim = flat_sim();
    sim.add(body(0.0, 0.0, 2.0)).unwrap();
    let mut controller = DragController::new();
    let mut nav = orbit();

    let picked = controller.pointer_down(Vec2::new(0.04, 0.04), &top_down(), &mut nav, &mut sim);
    assert_eq!(picked, None);
    assert_eq!(controller.state(), DragState::Idle);
    assert!(nav.enabled);
    assert_eq!(nav.toggles, 0);

    let steps = sim.step_count();
    assert!(!controller.pointer_move(Vec2::new(0.01, 0.0), &top_down(), &mut sim).unwrap());
    assert_eq!(sim.step_count(), steps);
    controller.pointer_up(&mut nav, &mut sim).unwrap();
    assert_eq!(sim.step_count(), steps);
    assert_eq!(nav.toggles, 0);
}

#[test]
fn drag_moves_and_clamps() {
    let mut sim = flat_sim();
    let id = sim.add(body(0.0, 0.0, 2.0)).unwrap();
    let mut controller = DragController::new();
    let mut nav = orbit();
    let camera = top_down();

    assert_eq!(controller.pointer_down(Vec2::ZERO, &camera, &mut nav, &mut sim), Some(id));
    assert!(controller.is_dragging());
    assert_eq!(controller.selected(), Some(id));
    assert!(!nav.enabled);

    // NDC x = 0.5 → world x = 500, clamped to the fabric edge.
    assert!(controller.pointer_move(Vec2::new(0.5, 0.0), &camera, &mut sim).unwrap());
    let p = sim.registry().find(id).unwrap().world_position();
    assert_eq!(p.x, 50.0);
    assert_eq!(p.z, 0.0);

    assert!(controller.pointer_move(Vec2::new(-0.5, 0.5), &camera, &mut sim).unwrap());
    let p = sim.registry().find(id).unwrap().world_position();
    assert_eq!(p.x, -50.0);
    assert_eq!(p.z, -50.0);

    assert!(controller.pointer_move(Vec2::new(0.01, -0.02), &camera, &mut sim).unwrap());
    let p = sim.registry().find(id).unwrap().world_position();
    assert!((p.x - 10.0).abs() < 1e-3);
    assert!((p.z - 20.0).abs() < 1e-3);
    // Height follows the step, not the drag plane.
    assert!((p.y - (-10.0 + 2.0)).abs() < 1e-4);
}

#[test]
fn tilted_fabric_clamps_z_by_cosine() {
    let mut sim = Simulation::from_config(SceneConfig { seed: Some(2), ..Default::default() }).unwrap();
    let id = sim.add(body(0.0, 0.0, 2.0)).unwrap();
    let mut controller = DragController::new();
    let mut nav = orbit();
    let camera = top_down();

    controller.pointer_down(Vec2::ZERO, &camera, &mut nav, &mut sim).unwrap();
    // NDC y = 0.5 → world z = -500, clamped to the tilted extent.
    assert!(controller.pointer_move(Vec2::new(0.0, 0.5), &camera, &mut sim).unwrap());
    let p = sim.registry().find(id).unwrap().world_position();
    let bound = 50.0 * (std::f32::consts::PI / 6.0).cos();
    assert!((p.z + bound).abs() < 1e-3);
    assert_eq!(p.x, 0.0);
}

#[test]
fn clamp_follows_fabric_translation() {
    let mut fabric = FabricConfig::flat(100.0, 10);
    fabric.position = [100.0, 0.0, 0.0];
    let mut sim = Simulation::from_config(SceneConfig { fabric, seed: Some(3), ..Default::default() })
        .unwrap();
    let id = sim.add(body(100.0, 0.0, 2.0)).unwrap();
    let mut controller = DragController::new();
    let mut nav = orbit();
    let camera = top_down();

    // NDC x = 0.1 → world x = 100, straight over the body.
    assert_eq!(controller.pointer_down(Vec2::new(0.1, 0.0), &camera, &mut nav, &mut sim), Some(id));

    assert!(controller.pointer_move(Vec2::new(0.5, 0.0), &camera, &mut sim).unwrap());
    let p = sim.registry().find(id).unwrap().world_position();
    assert_eq!(p.x, 150.0);

    assert!(controller.pointer_move(Vec2::new(-0.5, 0.5), &camera, &mut sim).unwrap());
    let p = sim.registry().find(id).unwrap().world_position();
    assert_eq!(p.x, 50.0);
    assert_eq!(p.z, -50.0);
}

#[test]
fn release_restores_navigation() {
    let mut sim = flat_sim();
    let id = sim.add(body(0.0, 0.0, 2.0)).unwrap();
    let mut controller = DragController::new();
    let mut nav = orbit();

    controller.pointer_down(Vec2::ZERO, &top_down(), &mut nav, &mut sim).unwrap();
    let steps = sim.step_count();
    controller.pointer_up(&mut nav, &mut sim).unwrap();

    assert_eq!(controller.state(), DragState::Idle);
    assert_eq!(controller.selected(), None);
    assert!(nav.enabled);
    assert_eq!(nav.toggles, 2);
    assert_eq!(sim.step_count(), steps + 1);
    assert!(sim.registry().find(id).is_some());
}

#[test]
fn second_press_is_ignored_while_dragging() {
    let mut sim = flat_sim();
    let a = sim.add(body(0.0, 0.0, 2.0)).unwrap();
    sim.add(body(20.0, 0.0, 2.0)).unwrap();
    let mut controller = DragController::new();
    let mut nav = orbit();
    let camera = top_down();

    controller.pointer_down(Vec2::ZERO, &camera, &mut nav, &mut sim).unwrap();
    assert_eq!(controller.pointer_down(Vec2::new(0.02, 0.0), &camera, &mut nav, &mut sim), None);
    assert_eq!(controller.selected(), Some(a));
    assert_eq!(nav.toggles, 1);
}

#[test]
fn parallel_ray_does_not_move() {
    let mut sim = flat_sim();
    let id = sim.add(body(0.0, 0.0, 2.0)).unwrap();
    let mut controller = DragController::new();
    let mut nav = orbit();

    controller.pointer_down(Vec2::ZERO, &top_down(), &mut nav, &mut sim).unwrap();
    let before = sim.registry().find(id).unwrap().world_position();
    let steps = sim.step_count();

    let sideways = Fixed(Ray::new(Vec3::new(-100.0, before.y, 0.0), Vec3::X).unwrap());
    assert!(!controller.pointer_move(Vec2::ZERO, &sideways, &mut sim).unwrap());

    let away = Fixed(Ray::new(Vec3::new(0.0, 100.0, 0.0), Vec3::Y).unwrap());
    assert!(!controller.pointer_move(Vec2::ZERO, &away, &mut sim).unwrap());

    assert_eq!(sim.registry().find(id).unwrap().world_position(), before);
    assert_eq!(sim.step_count(), steps);
    assert!(controller.is_dragging());
}

#[test]
fn drag_emits_events() {
    let config = SceneConfig {
        fabric: FabricConfig::flat(100.0, 4),
        seed: Some(3),
        ..Default::default()
    };
    let fabric = gravwell_solver::Fabric::new(&config.fabric).unwrap();
    let sink = VecSink::new();
    let log = sink.log();
    let mut sim = Simulation::builder()
        .config(config)
        .fabric(fabric)
        .sink(Box::new(sink))
        .build()
        .unwrap();
    let id = sim.add(body(0.0, 0.0, 2.0)).unwrap();

    let mut controller = DragController::new();
    let mut nav = orbit();
    controller.pointer_down(Vec2::ZERO, &top_down(), &mut nav, &mut sim).unwrap();
    controller.pointer_move(Vec2::new(0.01, 0.0), &top_down(), &mut sim).unwrap();
    controller.pointer_up(&mut nav, &mut sim).unwrap();
    sim.flush_events();

    let events = log.lock().unwrap();
    let started: Vec<MassId> = events
        .iter()
        .filter_map(|e| match e.kind {
            EventKind::DragStarted { id } => Some(id),
            _ => None,
        })
        .collect();
    assert_eq!(started, vec![id]);
    let ended = events.iter().find_map(|e| match &e.kind {
        EventKind::DragEnded { id, position } => Some((*id, *position)),
        _ => None,
    });
    let (ended_id, position) = ended.unwrap();
    assert_eq!(ended_id, id);
    assert!((position[0] - 10.0).abs() < 1e-3);
}
