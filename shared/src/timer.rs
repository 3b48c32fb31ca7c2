pub const PROMPT_WORDS: [&str; 5] = ["사과", "바나나", "포도", "오렌지", "수박"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CountdownId(u32);

impl CountdownId {
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running { remaining: u32, word: String },
    Expired { word: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    Running { remaining: u32, word: String },
    Expired { word: String },
    /// The countdown already finished or never existed.
    Stale,
}

#[derive(Clone, Debug)]
struct Countdown {
    id: CountdownId,
    remaining: u32,
    word: String,
}

/// Picks a word from a uniform roll in `[0, 1)`.
pub fn pick_word(words: &[String], roll: f64) -> Option<&str> {
    if words.is_empty() {
        return None;
    }
    let roll = if roll.is_finite() { roll } else { 0.0 };
    let index = (roll.max(0.0) * words.len() as f64) as usize;
    words.get(index.min(words.len() - 1)).map(String::as_str)
}

pub fn word_label(word: &str) -> String {
    format!("제시어: {word}")
}

pub fn timer_label(remaining: u32) -> String {
    format!("타이머: {remaining}초")
}

/// Countdowns for the drawing prompt. Starting a new countdown leaves any
/// running one alone, so several can tick side by side; each is driven by
/// its own [`PromptTimer::tick`] calls.
#[derive(Clone, Debug)]
pub struct PromptTimer {
    seconds: u32,
    countdowns: Vec<Countdown>,
    latest: Option<CountdownId>,
    next_id: u32,
}

impl PromptTimer {
    pub fn new(seconds: u32) -> Self {
        Self {
            seconds: seconds.max(1),
            countdowns: Vec::new(),
            latest: None,
            next_id: 0,
        }
    }

    pub fn start(&mut self, word: &str) -> CountdownId {
        let latest = self.latest;
        self.countdowns
            .retain(|countdown| countdown.remaining > 0 || Some(countdown.id) == latest);
        let id = CountdownId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.countdowns.push(Countdown {
            id,
            remaining: self.seconds,
            word: word.to_string(),
        });
        self.latest = Some(id);
        log::debug!(
            "countdown {} started word={word} running={}",
            id.0,
            self.running_count()
        );
        id
    }

    pub fn tick(&mut self, id: CountdownId) -> Tick {
        let Some(countdown) = self
            .countdowns
            .iter_mut()
            .find(|countdown| countdown.id == id)
        else {
            return Tick::Stale;
        };
        if countdown.remaining == 0 {
            return Tick::Stale;
        }
        countdown.remaining -= 1;
        if countdown.remaining == 0 {
            log::debug!("countdown {} expired word={}", id.0, countdown.word);
            Tick::Expired {
                word: countdown.word.clone(),
            }
        } else {
            Tick::Running {
                remaining: countdown.remaining,
                word: countdown.word.clone(),
            }
        }
    }

    /// State of the most recently started countdown.
    pub fn state(&self) -> TimerState {
        let Some(latest) = self.latest else {
            return TimerState::Idle;
        };
        match self
            .countdowns
            .iter()
            .find(|countdown| countdown.id == latest)
        {
            Some(countdown) if countdown.remaining > 0 => TimerState::Running {
                remaining: countdown.remaining,
                word: countdown.word.clone(),
            },
            Some(countdown) => TimerState::Expired {
                word: countdown.word.clone(),
            },
            None => TimerState::Idle,
        }
    }

    pub fn latest_word(&self) -> Option<&str> {
        let latest = self.latest?;
        self.countdowns
            .iter()
            .find(|countdown| countdown.id == latest)
            .map(|countdown| countdown.word.as_str())
    }

    pub fn running_count(&self) -> usize {
        self.countdowns
            .iter()
            .filter(|countdown| countdown.remaining > 0)
            .count()
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }
}

#[cfg(test)]
#[path = "tests/timer_tests.rs"]
mod tests;
