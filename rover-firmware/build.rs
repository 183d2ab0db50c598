//! Build script for rover-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates rover.toml at compile time
//! - Emits the validated settings as a `const` configuration

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    let board = validate_config();
    generate_config(&board);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Settings read from rover.toml, defaults filled in
struct Board {
    i2c_frequency: i64,
    servo_address: i64,
    servo_prescale: i64,
    eeprom_address: i64,
    eeprom_settle_ms: i64,
    sonar_max_range_cm: i64,
    sonar_attempts: i64,
    keypad_yield_interval: i64,
    keypad_debounce_ms: i64,
    led_brightness: i64,
    led_mode: String,
    drive_speed: i64,
    spin_speed: i64,
    steer_angle: i64,
    mast_step: i64,
}

/// Integer setting with its allowed range
struct Field {
    section: &'static str,
    key: &'static str,
    default: i64,
    min: i64,
    max: i64,
}

fn field(section: &'static str, key: &'static str, default: i64, min: i64, max: i64) -> Field {
    Field {
        section,
        key,
        default,
        min,
        max,
    }
}

impl Field {
    fn read(&self, config: &toml::Value, errors: &mut Vec<String>) -> i64 {
        let value = match config.get(self.section).and_then(|s| s.get(self.key)) {
            None => return self.default,
            Some(toml::Value::Integer(v)) => *v,
            Some(_) => {
                errors.push(format!("[{}] {} must be an integer", self.section, self.key));
                return self.default;
            }
        };
        if value < self.min || value > self.max {
            errors.push(format!(
                "[{}] {} must be {}-{}",
                self.section, self.key, self.min, self.max
            ));
        }
        value
    }
}

/// Validate rover.toml configuration at compile time
fn validate_config() -> Board {
    // Re-run if rover.toml changes
    println!("cargo:rerun-if-changed=rover.toml");

    let config_path = Path::new("rover.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: rover.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a rover.toml board configuration file.    ║\n\
            ║  Please create one in the rover-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read rover.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in rover.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    let board = read_board(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid settings in rover.toml                           ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=rover.toml validated successfully");
    board
}

fn read_board(config: &toml::Value, errors: &mut Vec<String>) -> Board {
    let led_mode = match config.get("led").and_then(|s| s.get("mode")) {
        None => "auto".to_string(),
        Some(toml::Value::String(mode)) if mode == "auto" || mode == "manual" => mode.clone(),
        Some(_) => {
            errors.push("[led] mode must be 'auto' or 'manual'".to_string());
            "auto".to_string()
        }
    };

    Board {
        i2c_frequency: field("i2c", "frequency", 100_000, 10_000, 1_000_000).read(config, errors),
        servo_address: field("servo", "address", 0x40, 0x08, 0x77).read(config, errors),
        servo_prescale: field("servo", "prescale", 101, 3, 255).read(config, errors),
        eeprom_address: field("eeprom", "address", 0x50, 0x08, 0x77).read(config, errors),
        eeprom_settle_ms: field("eeprom", "settle_ms", 1, 0, 100).read(config, errors),
        sonar_max_range_cm: field("sonar", "max_range_cm", 500, 2, 1000).read(config, errors),
        sonar_attempts: field("sonar", "attempts", 10, 1, 50).read(config, errors),
        keypad_yield_interval: field("keypad", "yield_interval", 1000, 1, 1_000_000)
            .read(config, errors),
        keypad_debounce_ms: field("keypad", "debounce_ms", 150, 0, 5000).read(config, errors),
        led_brightness: field("led", "brightness", 40, 0, 255).read(config, errors),
        led_mode,
        drive_speed: field("teleop", "drive_speed", 60, 0, 100).read(config, errors),
        spin_speed: field("teleop", "spin_speed", 50, 0, 100).read(config, errors),
        steer_angle: field("teleop", "steer_angle", 30, 0, 90).read(config, errors),
        mast_step: field("teleop", "mast_step", 15, 1, 90).read(config, errors),
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the validated settings as Rust constants
fn generate_config(board: &Board) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mode = if board.led_mode == "manual" {
        "Manual"
    } else {
        "Auto"
    };

    let source = format!(
        "// Generated from rover.toml by build.rs\n\
        pub const I2C_FREQUENCY_HZ: u32 = {i2c};\n\
        pub const KEY_DEBOUNCE_MS: u64 = {debounce};\n\
        pub const ROVER_CONFIG: RoverConfig = RoverConfig {{\n\
        \x20   servo: ServoConfig {{ address: {servo_addr:#04x}, prescale: {prescale} }},\n\
        \x20   eeprom: EepromConfig {{ address: {eeprom_addr:#04x}, settle_ms: {settle} }},\n\
        \x20   sonar: SonarConfig {{ max_range_cm: {range}, attempts: {attempts} }},\n\
        \x20   keypad: KeypadConfig {{ yield_interval: {yield_interval}, max_polls: None }},\n\
        \x20   led: LedConfig {{ brightness: {brightness}, mode: UpdateMode::{mode} }},\n\
        \x20   teleop: TeleopConfig {{ drive_speed: {drive}, spin_speed: {spin}, steer_angle: {steer}, mast_step: {mast} }},\n\
        }};\n",
        i2c = board.i2c_frequency,
        debounce = board.keypad_debounce_ms,
        servo_addr = board.servo_address,
        prescale = board.servo_prescale,
        eeprom_addr = board.eeprom_address,
        settle = board.eeprom_settle_ms,
        range = board.sonar_max_range_cm,
        attempts = board.sonar_attempts,
        yield_interval = board.keypad_yield_interval,
        brightness = board.led_brightness,
        mode = mode,
        drive = board.drive_speed,
        spin = board.spin_speed,
        steer = board.steer_angle,
        mast = board.mast_step,
    );

    fs::write(out_dir.join("board_config.rs"), source).unwrap();
}
