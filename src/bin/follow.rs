use line_follower::config::load_config;
use line_follower::controller::{MotionInterface, StepController, VisionSource};
use line_follower::diagnostics::{draw_candidates, draw_observation, draw_zone_grid};
use line_follower::error::Error;
use line_follower::image::io::{load_rgb_image, save_rgb_image};
use line_follower::image::FrameRgb8;
use line_follower::types::{Direction, PathObservation};
use line_follower::{CorrectionPolicy, PathDetector};
use log::info;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

enum Mode {
    Cli,
    Run,
    Steps(usize),
}

/// Vision source replaying a directory of frames in name order.
struct DirectoryVision {
    frames: Vec<PathBuf>,
    next: usize,
}

impl DirectoryVision {
    fn open(dir: &Path) -> Result<Self, String> {
        let mut frames: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(|e| format!("Failed to read frame dir {}: {e}", dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                matches!(
                    p.extension().and_then(|e| e.to_str()),
                    Some("png") | Some("jpg") | Some("jpeg") | Some("bmp")
                )
            })
            .collect();
        frames.sort();
        if frames.is_empty() {
            return Err(format!("No frames found in {}", dir.display()));
        }
        Ok(Self { frames, next: 0 })
    }
}

impl VisionSource for DirectoryVision {
    fn latest_frame(&mut self) -> Result<FrameRgb8, Error> {
        let path = self
            .frames
            .get(self.next)
            .ok_or_else(|| Error::Vision("frame sequence exhausted".into()))?;
        let frame = load_rgb_image(path).map_err(Error::Vision)?;
        self.next += 1;
        Ok(frame)
    }
}

/// Motion backend that logs every primitive instead of driving hardware.
/// Useful for dry-running a frame sequence through the full control loop.
struct LoggingMotion;

impl MotionInterface for LoggingMotion {
    fn turn_in_place(&mut self, degrees: f32) -> Result<(), Error> {
        info!("LoggingMotion::turn_in_place {degrees:+.1}°");
        Ok(())
    }

    fn drive_straight(&mut self, distance_mm: f32, speed_mmps: f32) -> Result<(), Error> {
        info!("LoggingMotion::drive_straight {distance_mm:.0}mm at {speed_mmps:.0}mm/s");
        Ok(())
    }

    fn set_head_angle(&mut self, degrees: f32) -> Result<(), Error> {
        info!("LoggingMotion::set_head_angle {degrees:.1}°");
        Ok(())
    }

    fn set_lift_height(&mut self, fraction: f32) -> Result<(), Error> {
        info!("LoggingMotion::set_lift_height {fraction:.2}");
        Ok(())
    }

    fn set_head_light(&mut self, on: bool) -> Result<(), Error> {
        info!("LoggingMotion::set_head_light {on}");
        Ok(())
    }
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let config_path = args.next().ok_or_else(usage)?;
    let frame_dir = args.next().ok_or_else(usage)?;
    let mode = parse_mode(args.next().as_deref())?;

    let config = load_config(Path::new(&config_path))?;
    let jog_distance = config.policy.bands.large.move_mm;
    let policy = CorrectionPolicy::new(config.policy).map_err(|e| e.to_string())?;
    let detector = PathDetector::new(config.detector);
    let vision = DirectoryVision::open(Path::new(&frame_dir))?;

    let mut controller =
        StepController::new(detector, policy, vision, LoggingMotion, config.controller);
    controller.prepare().map_err(|e| e.to_string())?;

    match mode {
        Mode::Cli => repl(&mut controller, jog_distance),
        Mode::Run => follow(&mut controller, usize::MAX),
        Mode::Steps(n) => follow(&mut controller, n),
    }
}

fn parse_mode(arg: Option<&str>) -> Result<Mode, String> {
    match arg {
        None | Some("cli") => Ok(Mode::Cli),
        Some("run") => Ok(Mode::Run),
        Some(other) => match other.strip_prefix("steps:") {
            Some(n) => n
                .parse()
                .map(Mode::Steps)
                .map_err(|e| format!("Bad step count in {other:?}: {e}")),
            None => Err(format!("Unknown mode {other:?}. {}", usage())),
        },
    }
}

/// Free-running follow loop; stops when the frame sequence is exhausted or
/// after `max_steps` cycles.
fn follow(
    controller: &mut StepController<DirectoryVision, LoggingMotion>,
    max_steps: usize,
) -> Result<(), String> {
    let mut prev: Option<PathObservation> = None;
    for step in 0..max_steps {
        let outcome = match controller.step(prev.as_ref()) {
            Ok(outcome) => outcome,
            Err(Error::Vision(reason)) => {
                println!("Stopping after {step} step(s): {reason}");
                return Ok(());
            }
            Err(e) => return Err(e.to_string()),
        };
        print_outcome(step, &outcome.observation, &format!("{:?}", outcome.action));
        prev = Some(outcome.observation);
    }
    Ok(())
}

/// Interactive single-letter command loop: `s` step, `c` capture overlay,
/// `r`/`l` jog sideways, `n` pause, `e` exit.
fn repl(
    controller: &mut StepController<DirectoryVision, LoggingMotion>,
    jog_distance: f32,
) -> Result<(), String> {
    let stdin = io::stdin();
    let mut prev: Option<PathObservation> = None;
    let mut step = 0usize;
    loop {
        print!("C> ");
        io::stdout().flush().map_err(|e| e.to_string())?;
        let mut line = String::new();
        if stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?
            == 0
        {
            break; // EOF
        }
        match line.trim() {
            "s" => match controller.step(prev.as_ref()) {
                Ok(outcome) => {
                    print_outcome(step, &outcome.observation, &format!("{:?}", outcome.action));
                    prev = Some(outcome.observation);
                    step += 1;
                }
                Err(e) => println!("step failed: {e}"),
            },
            "c" => match controller.capture() {
                Ok((frame, report)) => {
                    let mut overlay = frame;
                    draw_zone_grid(&mut overlay, &controller_zone(report.trace.zone));
                    draw_candidates(&mut overlay, &report.trace);
                    draw_observation(&mut overlay, &report.observation);
                    let out = Path::new("capture.png");
                    match save_rgb_image(&overlay, out) {
                        Ok(()) => println!("Saved {}", out.display()),
                        Err(e) => println!("capture failed: {e}"),
                    }
                }
                Err(e) => println!("capture failed: {e}"),
            },
            "r" => report_jog(controller.jog(Direction::Right, jog_distance)),
            "l" => report_jog(controller.jog(Direction::Left, jog_distance)),
            "n" => std::thread::sleep(std::time::Duration::from_secs(1)),
            "e" => {
                println!("Bye.");
                break;
            }
            "" => {}
            other => println!("Unknown command {other:?} (s/c/r/l/n/e)"),
        }
    }
    Ok(())
}

fn controller_zone(zone: Option<line_follower::Zone>) -> line_follower::Zone {
    zone.unwrap_or_default()
}

fn report_jog(result: Result<(), Error>) {
    if let Err(e) = result {
        println!("jog failed: {e}");
    }
}

fn print_outcome(step: usize, obs: &PathObservation, action: &str) {
    if obs.found {
        println!(
            "step {step}: center={} box=({}, {}) {}x{} action={action}",
            obs.center(),
            obs.x,
            obs.y,
            obs.width,
            obs.height
        );
    } else {
        println!("step {step}: no path visible");
    }
}

fn usage() -> String {
    "Usage: follow <config.json> <frame_dir> [cli|run|steps:N]".to_string()
}
