use clap::Parser;
use traystencil::cli::{Cli, Commands};
use traystencil::settings::{EdgeMode, ResizeFilter, StencilConfig, TargetSize};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("traystencil").chain(args.iter().copied())).unwrap()
}

#[test]
fn generate_flags_override_defaults() {
    let cli = parse(&[
        "generate",
        "in.png",
        "out.png",
        "--size",
        "22",
        "--no-mask",
        "--white-brightness",
        "200",
        "--edges",
        "soft",
        "--filter",
        "catmull-rom",
    ]);
    let Commands::Generate { settings, .. } = cli.command else {
        panic!("expected generate");
    };
    let cfg = settings.apply(StencilConfig::default());

    assert_eq!(cfg.size, TargetSize::square(22));
    assert!(!cfg.circular_mask);
    assert!(cfg.crop_to_content);
    assert_eq!(cfg.white_brightness, 200);
    assert_eq!(cfg.edges, EdgeMode::Soft);
    assert_eq!(cfg.filter, ResizeFilter::CatmullRom);
}

#[test]
fn width_and_height_go_together() {
    let cli = parse(&["inspect", "in.png", "--width", "40", "--height", "20"]);
    let Commands::Inspect { settings, .. } = cli.command else {
        panic!("expected inspect");
    };
    assert_eq!(
        settings.apply(StencilConfig::default()).size,
        TargetSize {
            width: 40,
            height: 20
        }
    );

    let err = Cli::try_parse_from(["traystencil", "inspect", "in.png", "--width", "40"]);
    assert!(err.is_err());
}

#[test]
fn verbose_is_counted() {
    let cli = parse(&["-vv", "check"]);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn build_only_is_comma_separated() {
    let cli = parse(&["build", "--only", "tray,tray_small", "--dry-run"]);
    let Commands::Build { only, dry_run, .. } = cli.command else {
        panic!("expected build");
    };
    assert!(dry_run);
    assert_eq!(only.unwrap(), vec!["tray", "tray_small"]);
}
