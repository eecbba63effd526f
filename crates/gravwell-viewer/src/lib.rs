//! gravwell viewer using Bevy.
//!
//! Renders the fabric and its bodies, and wires keyboard and mouse input to
//! the simulation: `P` adds a planet, `B` adds a collapsed body, and the
//! left mouse button drags bodies across the fabric.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_resource::PrimitiveTopology;
use bevy::window::PrimaryWindow;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin, PanOrbitCameraSystemSet};
use tracing::{info, warn};

use gravwell_interact::{ndc_from_cursor, DragController, NavigationControl, PerspectiveCamera};
use gravwell_mesh::generators::uv_sphere;
use gravwell_mesh::TriangleMesh;
use gravwell_solver::{MassKind, SceneConfig, Simulation};
use gravwell_telemetry::TracingSink;
use gravwell_types::MassId;

const SPHERE_STACKS: usize = 32;
const SPHERE_SLICES: usize = 32;

/// System resource holding the simulation and the pointer state.
#[derive(Resource)]
struct SimRunner {
    sim: Simulation,
    drag: DragController,
    /// Bodies that already have an entity. The registry never shrinks.
    spawned: usize,
}

/// Tags the fabric entity.
#[derive(Component)]
struct FabricMesh;

/// Links a render entity to its body.
#[derive(Component)]
struct Body(MassId);

/// Orbit controls as seen by the drag controller.
struct OrbitNavigation<'a>(&'a mut PanOrbitCamera);

impl NavigationControl for OrbitNavigation<'_> {
    fn set_navigation_enabled(&mut self, enabled: bool) {
        self.0.enabled = enabled;
    }
}

/// Launch the Bevy viewer for a scene.
///
/// Logging is left to the caller's `tracing` subscriber.
pub fn launch_viewer(config: SceneConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut sim = Simulation::from_config(config)?;
    sim.bus_mut().add_sink(Box::new(TracingSink::default()));
    sim.fabric_mut().refresh_normals();

    info!(
        samples = sim.fabric().sample_count(),
        footprint = ?sim.footprint_mode(),
        "starting viewer"
    );

    let runner = SimRunner {
        sim,
        drag: DragController::new(),
        spawned: 0,
    };

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "gravwell - spacetime fabric".into(),
                    resolution: (1280., 720.).into(),
                    ..default()
                }),
                ..default()
            })
            .disable::<LogPlugin>(),
    );
    app.add_plugins(PanOrbitCameraPlugin);

    app.insert_resource(runner);
    app.insert_resource(ClearColor(Color::BLACK));

    app.add_systems(Startup, setup_scene);
    app.add_systems(
        Update,
        (
            handle_keys,
            handle_pointer.before(PanOrbitCameraSystemSet),
            spawn_bodies,
            sync_fabric,
            sync_bodies,
            flush_telemetry,
        )
            .chain(),
    );

    app.run();

    Ok(())
}

/// Converts a gravwell mesh into a Bevy triangle list.
fn to_bevy_mesh(mesh: &TriangleMesh) -> Mesh {
    let mut out = Mesh::new(PrimitiveTopology::TriangleList, Default::default());
    out.insert_attribute(Mesh::ATTRIBUTE_POSITION, mesh.interleaved_positions());
    out.insert_attribute(Mesh::ATTRIBUTE_NORMAL, mesh.normals.clone());
    out.insert_attribute(Mesh::ATTRIBUTE_UV_0, mesh.uvs.clone());
    out.insert_indices(Indices::U32(mesh.indices.clone()));
    out
}

/// `0xRRGGBB` to an sRGB color.
fn color_from_hex(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Pick-ray camera for Bevy's camera and its world transform.
fn pick_camera(camera: &Camera, transform: &GlobalTransform) -> PerspectiveCamera {
    let world_from_clip = transform.compute_matrix() * camera.clip_from_view().inverse();
    PerspectiveCamera::new(transform.translation(), world_from_clip)
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    runner: Res<SimRunner>,
) {
    // 1. Fabric
    let fabric = runner.sim.fabric();
    let placement = fabric.transform();

    let fabric_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.0, 0.8, 0.2),
        perceptual_roughness: 0.6,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(to_bevy_mesh(fabric.mesh())),
            material: fabric_material,
            transform: Transform::from_translation(placement.translation())
                .with_rotation(placement.rotation()),
            ..default()
        },
        bevy::render::view::NoFrustumCulling,
        FabricMesh,
    ));

    // 2. Lights
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        transform: Transform::from_xyz(10.0, 20.0, 15.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });

    // 3. Camera
    let eye = Vec3::new(0.0, 30.0, 50.0);
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        PanOrbitCamera {
            focus: Vec3::ZERO,
            radius: Some(eye.length()),
            zoom_lower_limit: Some(10.0),
            zoom_upper_limit: Some(200.0),
            ..default()
        },
    ));
}

fn handle_keys(keys: Res<ButtonInput<KeyCode>>, mut runner: ResMut<SimRunner>) {
    if runner.drag.is_dragging() {
        return;
    }
    if keys.just_pressed(KeyCode::KeyP) {
        if let Err(e) = runner.sim.add_planet() {
            warn!(error = %e, "could not add planet");
        }
    }
    if keys.just_pressed(KeyCode::KeyB) {
        if let Err(e) = runner.sim.add_collapsed() {
            warn!(error = %e, "could not add collapsed body");
        }
    }
}

fn handle_pointer(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<(&Camera, &GlobalTransform, &mut PanOrbitCamera)>,
    mut runner: ResMut<SimRunner>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, camera_transform, mut orbit)) = cameras.get_single_mut() else {
        return;
    };

    let pressed = buttons.just_pressed(MouseButton::Left);
    let released = buttons.just_released(MouseButton::Left);
    if !(pressed || released || runner.drag.is_dragging()) {
        return;
    }

    // Borrow parts independently
    let SimRunner { sim, drag, .. } = &mut *runner;
    let mut navigation = OrbitNavigation(&mut *orbit);

    if released {
        if let Err(e) = drag.pointer_up(&mut navigation, sim) {
            warn!(error = %e, "drag release failed");
        }
        return;
    }

    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Some(ndc) = ndc_from_cursor(cursor, Vec2::new(window.width(), window.height())) else {
        return;
    };
    let caster = pick_camera(camera, camera_transform);

    if pressed {
        drag.pointer_down(ndc, &caster, &mut navigation, sim);
    } else if drag.is_dragging() {
        if let Err(e) = drag.pointer_move(ndc, &caster, sim) {
            warn!(error = %e, "drag update failed");
        }
    }
}

/// Gives every new body a sphere entity.
fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut runner: ResMut<SimRunner>,
) {
    let start = runner.spawned;
    for object in &runner.sim.registry().all()[start..] {
        let color = color_from_hex(object.color());
        let emissive = match object.kind() {
            MassKind::Planet { .. } => LinearRgba::from(color) * 0.4,
            MassKind::Collapsed => LinearRgba::BLACK,
        };
        let material = materials.add(StandardMaterial {
            base_color: color,
            emissive,
            perceptual_roughness: 0.5,
            ..default()
        });
        let sphere = uv_sphere(object.radius(), SPHERE_STACKS, SPHERE_SLICES);

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(to_bevy_mesh(&sphere)),
                material,
                transform: Transform::from_translation(object.world_position()),
                ..default()
            },
            Body(object.id()),
        ));
    }
    runner.spawned = runner.sim.registry().len();
}

/// Uploads fabric heights and normals after a step.
fn sync_fabric(
    mut runner: ResMut<SimRunner>,
    mut meshes: ResMut<Assets<Mesh>>,
    query: Query<&Handle<Mesh>, With<FabricMesh>>,
) {
    if !runner.sim.fabric().normals_stale() {
        return;
    }
    runner.sim.fabric_mut().refresh_normals();

    let Ok(handle) = query.get_single() else {
        return;
    };
    if let Some(mesh) = meshes.get_mut(handle) {
        let fabric = runner.sim.fabric();
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, fabric.local_positions());
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, fabric.normals().to_vec());
    }
}

fn sync_bodies(runner: Res<SimRunner>, mut bodies: Query<(&Body, &mut Transform)>) {
    let registry = runner.sim.registry();
    for (body, mut transform) in &mut bodies {
        if let Some(object) = registry.find(body.0) {
            transform.translation = object.world_position();
        }
    }
}

fn flush_telemetry(mut runner: ResMut<SimRunner>) {
    runner.sim.flush_events();
}
