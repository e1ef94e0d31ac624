//! Headless demo driver for the Aeris viewer.
//!
//! Runs the full frame loop — input sampling, world-state sync, avatar
//! animation, sky scheduling — against a scripted flight instead of a
//! window, so the whole stack can be exercised and profiled without a GPU.
//! A rendering front-end replaces the scripted [`KeyTracker`] feed with
//! real window events and copies the produced poses onto its cameras.

use clap::Parser;

use aeris_app::FrameCoordinator;
use aeris_avatar::{AvatarClip, FlightAnimator, face_movement};
use aeris_config::{CliArgs, Config};
use aeris_input::{KeyTracker, MovementBindings};
use aeris_sky::{SimClock, WeatherSchedule, default_presets, sun_direction, sun_intensity};
use winit::keyboard::KeyCode;

/// Frame rate the headless loop simulates.
const FRAME_HZ: f64 = 60.0;

/// Wall seconds the one-shot stop clip runs before the demo reports it
/// finished to the animator (a real front-end gets this from the mixer).
const STOP_CLIP_SECONDS: f64 = 1.5;

fn main() {
    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(dir) => match Config::load_or_create(dir) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("failed to load config: {e}");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    aeris_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    run(&config, &args);
}

fn run(config: &Config, args: &CliArgs) {
    let mut coordinator = FrameCoordinator::new(config);
    let bindings = MovementBindings::default();
    let mut keys = KeyTracker::new();
    let mut animator = FlightAnimator::new();
    let mut clock = SimClock::new(config.sky.time_scale);
    let mut weather = WeatherSchedule::new(default_presets(), config.sky.weather_interval_s);
    let mut avatar_facing = glam::DQuat::IDENTITY;
    let mut stop_clip_elapsed = 0.0;

    let start = args.location.as_deref().unwrap_or("Tokyo");
    match config.location(start) {
        Some(preset) => coordinator.teleport_to(preset),
        None => {
            let known: Vec<&str> = config.locations.iter().map(|l| l.name.as_str()).collect();
            tracing::warn!("unknown location {start:?}, known: {known:?}");
        }
    }

    let dt = 1.0 / FRAME_HZ;
    let frames = (args.duration * FRAME_HZ) as u64;

    // Scripted flight: lift off after one second, boost through the middle
    // stretch, settle for the final two seconds.
    for frame in 0..frames {
        let t = frame as f64 * dt;
        match frame {
            f if f == (FRAME_HZ * 1.0) as u64 => {
                keys.press(KeyCode::KeyW);
                keys.press(KeyCode::KeyE);
            }
            f if f == (FRAME_HZ * 3.0) as u64 => keys.press(KeyCode::ShiftLeft),
            f if f == (FRAME_HZ * (args.duration - 4.0).max(2.0)) as u64 => {
                keys.release(KeyCode::ShiftLeft);
                keys.release(KeyCode::KeyE);
            }
            f if f == (FRAME_HZ * (args.duration - 2.0).max(2.0)) as u64 => {
                keys.release(KeyCode::KeyW);
            }
            _ => {}
        }

        // Near phase input: the scripted camera keeps the teleport view.
        let input = bindings.sample(&keys, coordinator.state().orientation);
        let output = coordinator.tick(&input, dt);

        if let Some(fade) = animator.update(input.planar_active()) {
            tracing::info!(from = ?fade.from, to = ?fade.to, "avatar crossfade");
        }
        if animator.current() == AvatarClip::FlyStop {
            stop_clip_elapsed += dt;
            if stop_clip_elapsed >= STOP_CLIP_SECONDS
                && let Some(fade) = animator.clip_finished(AvatarClip::FlyStop)
            {
                tracing::info!(from = ?fade.from, to = ?fade.to, "avatar crossfade");
            }
        } else {
            stop_clip_elapsed = 0.0;
        }
        avatar_facing = face_movement(
            avatar_facing,
            input.planar_direction(),
            input.orientation,
            dt,
        );

        clock.advance(dt);
        weather.advance(dt);

        if frame % (FRAME_HZ as u64) == 0 {
            let sun = sun_direction(clock.hour_of_day());
            tracing::debug!(
                t_s = t,
                hour = clock.hour_of_day(),
                sun_intensity = sun_intensity(sun),
                weather = %weather.current().name,
                zoom_step = output.zoom_step,
                "sky"
            );
        }
    }

    let state = coordinator.state();
    tracing::info!(
        frames,
        distance_m = state.position.length(),
        altitude_m = state.altitude(),
        clip = ?animator.current(),
        "demo flight complete"
    );
}
