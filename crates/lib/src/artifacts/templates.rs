//! Templates for generated files.
//!
//! `{root}` and `{build_type}` are substituted in the launch scripts. The
//! configuration file has no placeholders and is written verbatim.

/// Archipelago client configuration read by the engine at startup.
pub const CONFIG_TEMPLATE: &str = r#"# Archipelago Configuration for Selaco
# This file is automatically generated by the build script

[connection]
# Server connection settings
server_address = archipelago.gg
server_port = 38281
slot_name = Player1
password = 

[game]
# Game-specific settings
death_link = false
auto_connect = false
debug_mode = false

[display]
# HUD and display settings
show_status_hud = true
show_item_notifications = true
show_location_notifications = true
hud_position_x = 10
hud_position_y = 10

[audio]
# Audio notification settings
item_received_sound = true
location_checked_sound = true
connection_sound = true
"#;

/// Launcher for bash-compatible shells.
pub const LAUNCH_SH_TEMPLATE: &str = r#"#!/bin/bash
echo "Starting Selaco with Archipelago integration..."
echo

cd "{root}"

# Set environment variables
export SELACO_CONFIG_PATH="{root}"
export ARCHIPELAGO_CONFIG_PATH="{root}/archipelago.cfg"

# Launch Selaco
if [ -f "build/src/{build_type}/selaco" ]; then
    echo "Launching Selaco..."
    "./build/src/{build_type}/selaco" "$@"
elif [ -f "build/src/selaco" ]; then
    echo "Launching Selaco..."
    ./build/src/selaco "$@"
else
    echo "ERROR: Selaco executable not found!"
    echo "Make sure the build completed successfully."
    exit 1
fi
"#;

/// Launcher for cmd.exe. Uses CRLF line endings when written.
pub const LAUNCH_BAT_TEMPLATE: &str = r#"@echo off
echo Starting Selaco with Archipelago integration...
echo.

cd /d "{root}"

REM Set environment variables
set SELACO_CONFIG_PATH={root}
set ARCHIPELAGO_CONFIG_PATH={root}\archipelago.cfg

REM Launch Selaco
if exist "build\src\{build_type}\selaco.exe" (
    echo Launching Selaco...
    "build\src\{build_type}\selaco.exe" %*
) else if exist "build\src\selaco.exe" (
    echo Launching Selaco...
    "build\src\selaco.exe" %*
) else (
    echo ERROR: Selaco executable not found!
    echo Make sure the build completed successfully.
    pause
    exit /b 1
)
"#;
