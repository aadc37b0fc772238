//! WebAssembly bindings for sketch-core.
//!
//! This module provides JavaScript-callable functions when compiled to WASM.
//! The browser front-end feeds pointer and button events in and reads the
//! drawing back as JSON after each call.

use wasm_bindgen::prelude::*;

use crate::input::{PointerEvent, PointerPhase};
use crate::{Action, Color, Control, DrawingMachine, SketchConfig};

/// Initialize the sketch WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Drawing session instance for WASM.
#[wasm_bindgen]
pub struct WasmSketch {
    machine: DrawingMachine,
}

#[wasm_bindgen]
impl WasmSketch {
    /// Create a new drawing session.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            machine: DrawingMachine::new(),
        }
    }

    /// Create a session from a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error string if the configuration is invalid.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<WasmSketch, String> {
        let config = SketchConfig::from_json(json).map_err(|e| e.to_string())?;
        Ok(Self {
            machine: DrawingMachine::with_config(&config),
        })
    }

    /// Dispatch an action given as JSON, e.g. `{"type":"Undo"}`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the JSON is not a valid action.
    #[wasm_bindgen(js_name = dispatchJson)]
    pub fn dispatch_json(&mut self, json: &str) -> Result<(), String> {
        let action: Action = serde_json::from_str(json).map_err(|e| e.to_string())?;
        self.machine.dispatch(action);
        Ok(())
    }

    /// Pointer pressed at (x, y).
    ///
    /// # Errors
    ///
    /// Returns an error string for non-finite coordinates.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Result<(), String> {
        self.pointer(PointerPhase::Down, x, y)
    }

    /// Pointer moved to (x, y).
    ///
    /// # Errors
    ///
    /// Returns an error string for non-finite coordinates.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Result<(), String> {
        self.pointer(PointerPhase::Move, x, y)
    }

    /// Pointer released.
    ///
    /// # Errors
    ///
    /// Returns an error string if the release is rejected.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> Result<(), String> {
        self.pointer(PointerPhase::Up, 0.0, 0.0)
    }

    /// Pointer gesture cancelled by the browser.
    ///
    /// # Errors
    ///
    /// Returns an error string if the cancel is rejected.
    #[wasm_bindgen(js_name = pointerCancel)]
    pub fn pointer_cancel(&mut self) -> Result<(), String> {
        self.pointer(PointerPhase::Cancel, 0.0, 0.0)
    }

    /// Select a stroke color given as hex.
    ///
    /// # Errors
    ///
    /// Returns an error string if the color cannot be parsed.
    #[wasm_bindgen(js_name = selectColor)]
    pub fn select_color(&mut self, hex: &str) -> Result<(), String> {
        let color = Color::from_hex(hex).map_err(|e| e.to_string())?;
        self.machine.handle_control(Control::Swatch(color));
        Ok(())
    }

    /// Undo the last stroke. Returns `false` if the button is disabled.
    pub fn undo(&mut self) -> bool {
        self.machine.handle_control(Control::Undo).is_some()
    }

    /// Redo the last undone stroke. Returns `false` if the button is disabled.
    pub fn redo(&mut self) -> bool {
        self.machine.handle_control(Control::Redo).is_some()
    }

    /// Clear the drawing.
    pub fn clear(&mut self) {
        self.machine.handle_control(Control::Clear);
    }

    /// Whether the undo button should be enabled.
    #[wasm_bindgen(js_name = canUndo)]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.machine.current_state().can_undo()
    }

    /// Whether the redo button should be enabled.
    #[wasm_bindgen(js_name = canRedo)]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.machine.current_state().can_redo()
    }

    /// Get the full drawing state as JSON.
    #[wasm_bindgen(js_name = getStateJson)]
    #[must_use]
    pub fn get_state_json(&self) -> String {
        serde_json::to_string(self.machine.current_state()).unwrap_or_default()
    }

    /// Get the strokes to paint, bottom to top, as a JSON array.
    #[wasm_bindgen(js_name = getRenderListJson)]
    #[must_use]
    pub fn get_render_list_json(&self) -> String {
        let strokes: Vec<_> = self.machine.current_state().render_list().collect();
        serde_json::to_string(&strokes).unwrap_or_default()
    }

    /// Get the palette as a JSON array of hex strings.
    #[wasm_bindgen(js_name = getPaletteJson)]
    #[must_use]
    pub fn get_palette_json(&self) -> String {
        serde_json::to_string(self.machine.palette().colors()).unwrap_or_default()
    }

    /// Number of dispatches applied so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.machine.revision()
    }
}

impl WasmSketch {
    fn pointer(&mut self, phase: PointerPhase, x: f32, y: f32) -> Result<(), String> {
        self.machine
            .handle_pointer(PointerEvent::new(phase, x, y))
            .map_err(|e| e.to_string())
    }
}

impl Default for WasmSketch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasm_sketch_new_starts_empty() {
        let sketch = WasmSketch::new();
        assert!(!sketch.can_undo());
        assert!(!sketch.can_redo());
        assert_eq!(sketch.get_render_list_json(), "[]");
    }

    #[test]
    fn pointer_gesture_commits_stroke() {
        let mut sketch = WasmSketch::new();
        sketch.pointer_down(1.0, 1.0).expect("down");
        sketch.pointer_move(2.0, 2.0).expect("move");
        sketch.pointer_up().expect("up");
        assert!(sketch.can_undo());

        let strokes: serde_json::Value =
            serde_json::from_str(&sketch.get_render_list_json()).expect("valid json");
        assert_eq!(strokes[0]["points"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn pointer_cancel_commits_partial_stroke() {
        let mut sketch = WasmSketch::new();
        sketch.pointer_down(1.0, 1.0).expect("down");
        assert!(sketch.pointer_cancel().is_ok());
        assert!(sketch.can_undo());
        assert!(sketch.pointer_up().is_ok());
        assert_eq!(sketch.revision(), 4);
    }

    #[test]
    fn pointer_down_rejects_nan() {
        let mut sketch = WasmSketch::new();
        assert!(sketch.pointer_down(f32::NAN, 0.0).is_err());
        assert_eq!(sketch.revision(), 0);
    }

    #[test]
    fn undo_redo_report_disabled_buttons() {
        let mut sketch = WasmSketch::new();
        assert!(!sketch.undo());
        assert!(!sketch.redo());

        sketch.pointer_down(0.0, 0.0).expect("down");
        sketch.pointer_up().expect("up");
        assert!(sketch.undo());
        assert!(sketch.can_redo());
        assert!(sketch.redo());
    }

    #[test]
    fn dispatch_json_accepts_actions() {
        let mut sketch = WasmSketch::new();
        sketch
            .dispatch_json(r#"{"type":"StartStroke"}"#)
            .expect("start");
        sketch
            .dispatch_json(r#"{"type":"ExtendStroke","data":{"x":1.0,"y":2.0}}"#)
            .expect("extend");
        sketch.dispatch_json(r#"{"type":"EndStroke"}"#).expect("end");
        assert!(sketch.can_undo());
    }

    #[test]
    fn dispatch_json_rejects_invalid_json() {
        let mut sketch = WasmSketch::new();
        assert!(sketch.dispatch_json("{ not valid json }").is_err());
        assert!(sketch.dispatch_json(r#"{"type":"Erase"}"#).is_err());
    }

    #[test]
    fn select_color_validates_hex() {
        let mut sketch = WasmSketch::new();
        assert!(sketch.select_color("#FF0000").is_ok());
        assert!(sketch.select_color("red").is_err());
        assert!(sketch.get_state_json().contains("#FF0000"));
    }

    #[test]
    fn with_config_rejects_empty_palette() {
        assert!(WasmSketch::with_config(r#"{"palette":[]}"#).is_err());
        let sketch = WasmSketch::with_config(r##"{"palette":["#000"]}"##).expect("valid");
        assert_eq!(sketch.get_palette_json(), r##"["#000000"]"##);
    }

    #[test]
    fn clear_drops_history() {
        let mut sketch = WasmSketch::new();
        sketch.pointer_down(0.0, 0.0).expect("down");
        sketch.pointer_up().expect("up");
        sketch.clear();
        assert!(!sketch.can_undo());
        assert!(!sketch.redo());
    }
}
