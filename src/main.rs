// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! APC40 diagnostic tool.
//!
//! Small command-line harness around the library for checking that an
//! attached APC40 is reachable: list ports, monitor decoded input,
//! exercise the LEDs.

use std::env;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use apc40::{Apc40, Apc40Event, Apc40Options, ClipLedColor, LedState};

fn print_usage() {
    println!("APC40 - Akai APC40 control surface driver");
    println!();
    println!("Usage: apc40 [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --list-inputs           List available MIDI input ports");
    println!("  --list-outputs          List available MIDI output ports");
    println!("  --monitor [NAME]        Connect and print decoded events (default device: APC40)");
    println!("  --test-led [NAME]       Connect and run an LED test pattern");
    println!("  --help                  Show this help message");
}

fn print_ports(label: &str, ports: &[String]) {
    println!("Available MIDI {} ports:", label);
    if ports.is_empty() {
        println!("  (none)");
    }
    for (i, name) in ports.iter().enumerate() {
        println!("  {}: {}", i, name);
    }
}

fn connect(device_name: Option<&str>) -> Result<Apc40> {
    let mut options = Apc40Options::default();
    if let Some(name) = device_name {
        options = options.device_name(name);
    }

    println!("Connecting to '{}'...", options.device_name);
    let mut device = Apc40::new(options);
    if !device.connect() {
        anyhow::bail!(
            "Could not connect; use --list-inputs / --list-outputs to see available ports"
        );
    }
    Ok(device)
}

fn monitor(device_name: Option<&str>) -> Result<()> {
    let device = connect(device_name)?;
    let events = device.subscribe();

    println!("Monitoring APC40 input for 30 seconds (press Ctrl+C to stop)...");
    println!();

    let start_time = Instant::now();
    let run_duration = Duration::from_secs(30);

    while start_time.elapsed() < run_duration {
        match events.recv_timeout(Duration::from_millis(100)) {
            Ok(Apc40Event::ButtonDown(e)) => {
                println!(
                    "DOWN  {} (velocity {}, channel {})",
                    apc40::surface::button_name(e.note),
                    e.velocity,
                    e.channel
                );
            }
            Ok(Apc40Event::ButtonUp(e)) => {
                println!(
                    "UP    {} (channel {})",
                    apc40::surface::button_name(e.note),
                    e.channel
                );
            }
            Ok(Apc40Event::Controller(e)) => {
                println!(
                    "CC    {} = {}",
                    apc40::surface::controller_name(e.control_id, Some(e.channel)),
                    e.value
                );
            }
            Ok(Apc40Event::ClipLaunch(e)) => {
                println!("CLIP  ({}, {}) pressed={}", e.x, e.y, e.pressed);
            }
            Ok(other) => println!("{:?}", other),
            Err(_) => {} // timeout, keep polling
        }
    }

    println!();
    println!("Monitor complete!");
    Ok(())
}

fn test_leds(device_name: Option<&str>) -> Result<()> {
    let mut device = connect(device_name)?;

    println!("Sweeping the clip launch grid...");
    let colors = [ClipLedColor::Green, ClipLedColor::Red, ClipLedColor::Yellow];
    for (i, color) in colors.iter().enumerate() {
        for y in 0..5 {
            for x in 0..8 {
                device.set_clip_launch_color(x, y, *color)?;
            }
        }
        println!("Pass {} ({:?})", i + 1, color);
        thread::sleep(Duration::from_millis(400));
    }

    println!("Blinking the scene launch column...");
    for note in 0x52..=0x56 {
        device.set_led(note, LedState::Blink, 0)?;
    }
    thread::sleep(Duration::from_secs(1));

    println!("Clearing...");
    for y in 0..5 {
        for x in 0..8 {
            device.set_clip_launch_color(x, y, ClipLedColor::Off)?;
        }
    }
    for note in 0x52..=0x56 {
        device.clear_led(note, 0)?;
    }

    device.disconnect();
    println!("LED test complete!");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("APC40 - Akai APC40 control surface driver");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--list-inputs" => {
            print_ports("input", &Apc40::list_inputs());
        }
        "--list-outputs" => {
            print_ports("output", &Apc40::list_outputs());
        }
        "--monitor" => {
            monitor(args.get(2).map(String::as_str))?;
        }
        "--test-led" => {
            test_leds(args.get(2).map(String::as_str))?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
