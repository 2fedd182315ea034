use crate::shared::animation::CounterAnimation;
use contracts::domain::orders::OrderStats;

/// One of the four aggregate counters on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatCounter {
    Total,
    New,
    Completed,
    Today,
}

impl StatCounter {
    pub fn all() -> [StatCounter; 4] {
        [
            StatCounter::Total,
            StatCounter::New,
            StatCounter::Completed,
            StatCounter::Today,
        ]
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StatCounter::Total => "total-orders",
            StatCounter::New => "new-orders",
            StatCounter::Completed => "completed-orders",
            StatCounter::Today => "today-orders",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatCounter::Total => "Total orders",
            StatCounter::New => "New orders",
            StatCounter::Completed => "Completed",
            StatCounter::Today => "Today",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            StatCounter::Total => "orders",
            StatCounter::New => "bell",
            StatCounter::Completed => "check-circle",
            StatCounter::Today => "dashboard",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }

    fn pick(&self, stats: &OrderStats) -> Option<i64> {
        match self {
            StatCounter::Total => stats.total_orders,
            StatCounter::New => stats.new_orders,
            StatCounter::Completed => stats.completed_orders,
            StatCounter::Today => stats.today_orders,
        }
    }
}

/// Displayed counter values and the animations moving them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsBoard {
    displayed: [i64; 4],
    animations: [Option<CounterAnimation>; 4],
}

impl StatsBoard {
    pub fn value(&self, counter: StatCounter) -> i64 {
        self.displayed[counter.index()]
    }

    /// Show a snapshot without animating (initial load)
    pub fn set_immediately(&mut self, stats: &OrderStats) {
        for counter in StatCounter::all() {
            if let Some(value) = counter.pick(stats) {
                self.displayed[counter.index()] = value;
                self.animations[counter.index()] = None;
            }
        }
    }

    /// Start animating every counter present in `stats` from its displayed value
    pub fn animate_to(&mut self, stats: &OrderStats, duration_ms: u32, frame_ms: u32) {
        for counter in StatCounter::all() {
            if let Some(target) = counter.pick(stats) {
                let i = counter.index();
                let anim = CounterAnimation::new(self.displayed[i], target, duration_ms, frame_ms);
                self.displayed[i] = anim.displayed();
                self.animations[i] = (!anim.is_finished()).then_some(anim);
            }
        }
    }

    /// Advance every running animation by one frame; false once all are done
    pub fn tick(&mut self) -> bool {
        for (value, slot) in self.displayed.iter_mut().zip(self.animations.iter_mut()) {
            if let Some(anim) = slot {
                *value = anim.tick();
                if anim.is_finished() {
                    *slot = None;
                }
            }
        }
        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.animations.iter().any(Option::is_some)
    }
}
