use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::dtm_metadata::DtmMetadata;
use crate::engine::camera::first_person::{FirstPersonController, camera_controller};
use crate::engine::core::app_state::{AppState, FpsText, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::heightmap_loader::{HeightmapLoader, check_heightmap_loading};
use crate::engine::loading::metadata_loader::{MetadataLoader, load_metadata_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::terrain_creator::create_terrain_when_ready;
use crate::engine::scene::avatar::{spawn_avatar, spin_avatar};
use crate::engine::scene::terrain::spawn_procedural_terrain;

use constants::scene::{
    AMBIENT_LIGHT_BRIGHTNESS, AMBIENT_LIGHT_COLOR, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR,
    CAMERA_START_POSITION, DIRECTIONAL_LIGHT_COLOR, DIRECTIONAL_LIGHT_POSITION, rgb_components,
};

/// Runtime configuration resolved from command line arguments.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Output stem of a converted DTM product, or None for procedural terrain.
    pub dtm_stem: Option<String>,
}

impl ViewerConfig {
    /// The first positional argument selects the DTM product to walk on.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        Self {
            dtm_stem: args.next().filter(|stem| !stem.is_empty()),
        }
    }
}

pub fn create_app(config: ViewerConfig) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers DtmMetadata as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<DtmMetadata>::new(&["json"]));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<MetadataLoader>()
        .init_resource::<HeightmapLoader>()
        .init_resource::<FirstPersonController>()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(config);

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                load_metadata_system,
                check_heightmap_loading,
                create_terrain_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // Base runtime systems that run on all platforms.
    app.add_systems(
        Update,
        (camera_controller, spin_avatar).run_if(in_state(AppState::Running)),
    );

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

// Startup system that spawns everything except the terrain surface
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    config: Res<ViewerConfig>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    println!("=== MARS TERRAIN WALKER ===");
    match &config.dtm_stem {
        Some(stem) => println!("Terrain source: DTM product '{}'", stem),
        None => println!("Terrain source: procedural relief"),
    }

    spawn_lighting(&mut commands);
    spawn_camera(&mut commands);
    spawn_avatar(&mut commands, &mut meshes, &mut materials);

    // Without a DTM product the terrain is available immediately.
    if config.dtm_stem.is_none() {
        spawn_procedural_terrain(&mut commands, &mut meshes, &mut materials, &asset_server);
        loading_progress.terrain_created = true;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

fn spawn_lighting(commands: &mut Commands) {
    let (r, g, b) = rgb_components(AMBIENT_LIGHT_COLOR);
    commands.insert_resource(AmbientLight {
        color: Color::srgb_u8(r, g, b),
        brightness: AMBIENT_LIGHT_BRIGHTNESS,
        ..default()
    });

    let (r, g, b) = rgb_components(DIRECTIONAL_LIGHT_COLOR);
    let [x, y, z] = DIRECTIONAL_LIGHT_POSITION;
    commands.spawn((
        DirectionalLight {
            color: Color::srgb_u8(r, g, b),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(x, y, z).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_camera(commands: &mut Commands) {
    let [x, y, z] = CAMERA_START_POSITION;
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_xyz(x, y, z),
    ));
}

fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_args_without_arguments_selects_procedural_terrain() {
        let config = ViewerConfig::from_args(std::iter::empty());
        assert_eq!(config.dtm_stem, None);
    }

    #[test]
    fn from_args_takes_first_argument_as_stem() {
        let args = vec!["dtem_macf".to_string(), "ignored".to_string()];
        let config = ViewerConfig::from_args(args.into_iter());
        assert_eq!(config.dtm_stem.as_deref(), Some("dtem_macf"));
    }

    #[test]
    fn from_args_rejects_empty_stem() {
        let args = vec![String::new()];
        let config = ViewerConfig::from_args(args.into_iter());
        assert_eq!(config.dtm_stem, None);
    }
}
