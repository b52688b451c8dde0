//! Shared recording doubles for the controller integration tests

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use glam::Vec2;

use nova_siege::audio::{AudioBackend, SoundEffect};
use nova_siege::highscores::{ScoreStore, StoreError};
use nova_siege::present::{Overlay, Presentation, TextField};
use nova_siege::sim::Color;

#[derive(Default)]
pub struct ProbeInner {
    pub circles: usize,
    pub overlays_shown: Vec<Overlay>,
    pub overlays_hidden: Vec<Overlay>,
    pub texts: Vec<(TextField, String)>,
    pub labels: Vec<(Vec2, String, u32)>,
}

/// Presentation sink recording every call; clones share the log
#[derive(Clone, Default)]
pub struct ProbePresentation(pub Rc<RefCell<ProbeInner>>);

impl ProbePresentation {
    pub fn last_text(&self, field: TextField) -> Option<String> {
        self.0
            .borrow()
            .texts
            .iter()
            .rev()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.clone())
    }
}

impl Presentation for ProbePresentation {
    fn begin_frame(&mut self) -> Result<()> {
        Ok(())
    }

    fn draw_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) -> Result<()> {
        self.0.borrow_mut().circles += 1;
        Ok(())
    }

    fn draw_ring(&mut self, _center: Vec2, _radius: f32, _color: Color) -> Result<()> {
        Ok(())
    }

    fn draw_health_bar(&mut self, _center: Vec2, _fraction: f32) -> Result<()> {
        Ok(())
    }

    fn show_overlay(&mut self, overlay: Overlay) -> Result<()> {
        self.0.borrow_mut().overlays_shown.push(overlay);
        Ok(())
    }

    fn hide_overlay(&mut self, overlay: Overlay) -> Result<()> {
        self.0.borrow_mut().overlays_hidden.push(overlay);
        Ok(())
    }

    fn set_text(&mut self, field: TextField, value: &str) -> Result<()> {
        self.0.borrow_mut().texts.push((field, value.to_string()));
        Ok(())
    }

    fn show_floating_label(&mut self, pos: Vec2, text: &str, fade_ms: u32) -> Result<()> {
        self.0
            .borrow_mut()
            .labels
            .push((pos, text.to_string(), fade_ms));
        Ok(())
    }
}

/// Audio backend recording every effect; clones share the log
#[derive(Clone, Default)]
pub struct ProbeAudio(pub Rc<RefCell<Vec<SoundEffect>>>);

impl AudioBackend for ProbeAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.0.borrow_mut().push(effect);
    }
}

#[derive(Default)]
pub struct StoreInner {
    pub best: Option<u64>,
    pub saves: Vec<u64>,
}

/// Score store counting every save; clones share the state
#[derive(Clone, Default)]
pub struct ProbeStore(pub Rc<RefCell<StoreInner>>);

impl ScoreStore for ProbeStore {
    fn load(&mut self) -> Result<Option<u64>, StoreError> {
        Ok(self.0.borrow().best)
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        let mut inner = self.0.borrow_mut();
        inner.best = Some(score);
        inner.saves.push(score);
        Ok(())
    }
}
