//! WASM bindings for the browser page

#![cfg(feature = "wasm")]

use log::warn;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::{resolve_round, Difficulty, MatchConfig, MatchController, Move, SeededRng, StateUpdate};
use crate::{describe_difficulty, seed_from_f64, PreferenceStore, Preferences, RoundPhase};

/// Serialize to plain JS objects; maps would otherwise become ES `Map`s
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn parse_move(raw: &str) -> Result<Move, JsError> {
    raw.parse::<Move>().map_err(|e| JsError::new(&e.to_string()))
}

fn update_view(update: &StateUpdate) -> Result<JsValue, JsError> {
    to_js(&update.view())
}

/// A match driven from JavaScript
#[wasm_bindgen]
pub struct WasmGame {
    inner: MatchController<SeededRng>,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a match; seeds from `Math.random()` unless a seed is given
    #[wasm_bindgen(constructor)]
    pub fn new(difficulty: Option<String>, seed: Option<f64>) -> Result<WasmGame, JsError> {
        let difficulty = match difficulty {
            Some(raw) => raw.parse::<Difficulty>().map_err(|e| JsError::new(&e.to_string()))?,
            None => Difficulty::default(),
        };
        let rng = match seed {
            Some(seed) => SeededRng::new(seed_from_f64(seed).ok_or_else(|| {
                JsError::new(&format!("Seed must be a finite, non-negative number, got {}", seed))
            })?),
            None => SeededRng::from_unit(js_sys::Math::random()),
        };
        let inner = MatchController::with_config(MatchConfig::standard(difficulty), rng)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmGame { inner })
    }

    /// Play a round with no reveal delay
    #[wasm_bindgen(js_name = playRound)]
    pub fn play_round(&mut self, player_move: &str) -> Result<JsValue, JsError> {
        let player_move = parse_move(player_move)?;
        let update = self.inner.play_round(player_move)
            .map_err(|e| JsError::new(&e.to_string()))?;
        update_view(&update)
    }

    /// Fix the opponent's move and return it; call `revealRound` after the delay
    #[wasm_bindgen(js_name = beginRound)]
    pub fn begin_round(&mut self, player_move: &str) -> Result<String, JsError> {
        let player_move = parse_move(player_move)?;
        self.inner.begin_round(player_move)
            .map(|m| m.to_string())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = revealRound)]
    pub fn reveal_round(&mut self) -> Result<JsValue, JsError> {
        let update = self.inner.reveal_round()
            .map_err(|e| JsError::new(&e.to_string()))?;
        update_view(&update)
    }

    #[wasm_bindgen(js_name = setDifficulty)]
    pub fn set_difficulty(&mut self, level: &str) -> Result<(), JsError> {
        let level = level.parse::<Difficulty>().map_err(|e| JsError::new(&e.to_string()))?;
        self.inner.set_difficulty(level);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(self.inner.state())
    }

    #[wasm_bindgen(js_name = isMatchOver)]
    pub fn is_match_over(&self) -> bool {
        self.inner.is_match_over()
    }

    #[wasm_bindgen(js_name = isRoundPending)]
    pub fn is_round_pending(&self) -> bool {
        self.inner.phase() == RoundPhase::RoundPending
    }

    /// Opponent "thinking" time for the current difficulty
    #[wasm_bindgen(js_name = reactionDelayMs)]
    pub fn reaction_delay_ms(&self) -> u32 {
        self.inner.difficulty().reaction_delay_ms()
    }
}

/// Adjudicate a pairing without touching any match
#[wasm_bindgen(js_name = describeMatchup)]
pub fn describe_matchup(player_move: &str, opponent_move: &str) -> Result<JsValue, JsError> {
    let outcome = resolve_round(parse_move(player_move)?, parse_move(opponent_move)?);
    to_js(&outcome)
}

#[wasm_bindgen(js_name = getDifficultyDescription)]
pub fn get_difficulty_description(level: &str) -> Result<String, JsError> {
    let level = level.parse::<Difficulty>().map_err(|e| JsError::new(&e.to_string()))?;
    Ok(describe_difficulty(level))
}

/// Any JS object with `getItem`/`setItem`, e.g. `window.localStorage`
struct JsStorage<'a> {
    target: &'a JsValue,
}

impl JsStorage<'_> {
    fn method(&self, name: &str) -> Option<js_sys::Function> {
        js_sys::Reflect::get(self.target, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()
    }
}

impl PreferenceStore for JsStorage<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.method("getItem")?
            .call1(self.target, &JsValue::from_str(key))
            .ok()?
            .as_string()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(set_item) = self.method("setItem") else {
            warn!("storage has no setItem; {} not saved", key);
            return;
        };
        if set_item
            .call2(self.target, &JsValue::from_str(key), &JsValue::from_str(value))
            .is_err()
        {
            warn!("storage rejected {}", key);
        }
    }
}

#[wasm_bindgen(js_name = loadPreferences)]
pub fn load_preferences(storage: &JsValue) -> Result<JsValue, JsError> {
    to_js(&Preferences::load(&JsStorage { target: storage }))
}

#[wasm_bindgen(js_name = savePreferences)]
pub fn save_preferences(storage: &JsValue, prefs: JsValue) -> Result<(), JsError> {
    let prefs: Preferences = serde_wasm_bindgen::from_value(prefs)
        .map_err(|e| JsError::new(&format!("Invalid preferences: {}", e)))?;
    prefs.save(&mut JsStorage { target: storage });
    Ok(())
}
