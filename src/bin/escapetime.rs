use clap::{App, Arg, ArgMatches};
use escapetime::{render_threaded, write_ppm, Scene, Variant, View};
use num::Complex;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use std::time::Instant;
use tracing::{error, info};

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f32>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_size(s: &str) -> Result<(), String> {
    match parse_pair::<usize>(s, 'x') {
        Some((w, h)) if w > 0 && h > 0 => Ok(()),
        Some(_) => Err("Image dimensions must both be nonzero".to_string()),
        None => Err("Could not parse output image size".to_string()),
    }
}

fn validate_complex(s: &str) -> Result<(), String> {
    match parse_complex(s) {
        Some(_) => Ok(()),
        None => Err("Could not parse complex constant".to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

struct Preset {
    name: &'static str,
    variant: Variant,
    center_x: f64,
    center_y: f64,
    zoom: f64,
}

// The fixed menu.  Note that deep-zoom runs the plane out past what
// f32 iteration can resolve; it renders, but what it renders is the
// rounding, not the set.
const PRESETS: [Preset; 7] = [
    Preset {
        name: "mandelbrot",
        variant: Variant::Mandelbrot,
        center_x: -0.5,
        center_y: 0.0,
        zoom: 1.0,
    },
    Preset {
        name: "julia",
        variant: Variant::Julia(Complex { re: -0.7, im: 0.27015 }),
        center_x: 0.0,
        center_y: 0.0,
        zoom: 1.0,
    },
    Preset {
        name: "burning-ship",
        variant: Variant::BurningShip,
        center_x: -0.5,
        center_y: -0.5,
        zoom: 0.8,
    },
    Preset {
        name: "seahorse",
        variant: Variant::Mandelbrot,
        center_x: -0.743643887037151,
        center_y: 0.131825904205330,
        zoom: 1000.0,
    },
    Preset {
        name: "elephant",
        variant: Variant::Mandelbrot,
        center_x: 0.281717921930775,
        center_y: 0.5771052841488505,
        zoom: 500.0,
    },
    Preset {
        name: "julia-flower",
        variant: Variant::Julia(Complex { re: -0.4, im: 0.6 }),
        center_x: 0.0,
        center_y: 0.0,
        zoom: 1.0,
    },
    Preset {
        name: "deep-zoom",
        variant: Variant::Mandelbrot,
        center_x: -0.761574,
        center_y: -0.0847596,
        zoom: 10000.0,
    },
];

const SCENE: &str = "scene";
const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const THREADS: &str = "threads";
const OUTDIR: &str = "outdir";
const JULIA: &str = "julia";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("escapetime")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Escape-time fractal renderer")
        .arg(
            Arg::with_name(SCENE)
                .required(false)
                .long(SCENE)
                .short("c")
                .takes_value(true)
                .default_value("all")
                .possible_values(&[
                    "all",
                    "mandelbrot",
                    "julia",
                    "burning-ship",
                    "seahorse",
                    "elephant",
                    "julia-flower",
                    "deep-zoom",
                ])
                .help("Which preset scene to render"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1920x1080")
                .validator(|s| validate_size(&s))
                .help("Size of the output images"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("1000")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Iteration cap per pixel"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of render threads (default: all logical CPUs)"),
        )
        .arg(
            Arg::with_name(OUTDIR)
                .required(false)
                .long(OUTDIR)
                .short("o")
                .takes_value(true)
                .default_value(".")
                .help("Directory the .ppm files are written into"),
        )
        .arg(
            Arg::with_name(JULIA)
                .required(false)
                .long(JULIA)
                .short("j")
                .takes_value(true)
                .validator(|s| validate_complex(&s))
                .help("Override the Julia constant, as re,im"),
        )
        .get_matches()
}

fn main() {
    tracing_subscriber::fmt::init();

    let matches = args();
    let size = parse_pair::<usize>(matches.value_of(SIZE).unwrap(), 'x')
        .expect("Error parsing image dimensions");
    let iterations = usize::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Error parsing iteration count");
    let threads = match matches.value_of(THREADS) {
        Some(s) => usize::from_str(s).expect("Error parsing thread count"),
        None => num_cpus::get(),
    };
    let outdir = PathBuf::from(matches.value_of(OUTDIR).unwrap());
    let julia = matches
        .value_of(JULIA)
        .map(|s| parse_complex(s).expect("Error parsing Julia constant"));
    let wanted = matches.value_of(SCENE).unwrap();

    if let Err(e) = fs::create_dir_all(&outdir) {
        error!("could not create output directory {:?}: {}", outdir, e);
        process::exit(1);
    }

    for preset in PRESETS.iter() {
        if wanted != "all" && wanted != preset.name {
            continue;
        }
        let variant = match (preset.variant, julia) {
            (Variant::Julia(_), Some(c)) => Variant::Julia(c),
            (variant, _) => variant,
        };
        let view = View {
            center_x: preset.center_x,
            center_y: preset.center_y,
            zoom: preset.zoom,
        };
        let scene = Scene::new(variant, view, size.0, size.1, iterations)
            .expect("Preset scene failed validation");

        let started = Instant::now();
        let pixels = render_threaded(&scene, threads);
        let path = outdir.join(format!("{}.ppm", preset.name));
        match write_ppm(&path, &pixels, scene.width, scene.height) {
            Ok(()) => info!(
                scene = preset.name,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "wrote {:?}",
                path
            ),
            Err(e) => error!(scene = preset.name, "skipping scene: {}", e),
        }
    }
}
