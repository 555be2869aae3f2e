//! Keypad layout.
//!
//! ```text
//! [ MR ] [ M+ ] [ M- ] [ C  ]
//! [ AC ] [ ±  ] [ %  ] [ /  ]
//! [ 7  ] [ 8  ] [ 9  ] [ ×  ]
//! [ 4  ] [ 5  ] [ 6  ] [ -  ]
//! [ 1  ] [ 2  ] [ 3  ] [ +  ]
//! [ 0  ] [ .  ] [copy] [ =  ]
//! ```

use crate::core::Operator;
use crate::event::Event;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The event this button submits
    pub event: Event,
    /// Element id, e.g. `btn-7` or `btn-memory-recall`
    pub id: String,
    /// Text printed on the button
    pub label: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button for `event` at the given grid cell
    #[must_use]
    pub fn new(event: Event, row: usize, col: usize) -> Self {
        let label = match event {
            Event::ToggleSign => "±".to_string(),
            other => other.label(),
        };
        Self {
            event,
            id: button_id(event),
            label,
            row,
            col,
        }
    }
}

fn button_id(event: Event) -> String {
    let name = match event {
        Event::Digit(d) => return format!("btn-{d}"),
        Event::Decimal => "decimal",
        Event::Operator(Operator::Add) => "plus",
        Event::Operator(Operator::Subtract) => "minus",
        Event::Operator(Operator::Multiply) => "times",
        Event::Operator(Operator::Divide) => "divide",
        Event::Equals => "equals",
        Event::Clear => "clear",
        Event::AllClear => "all-clear",
        Event::ToggleSign => "toggle-sign",
        Event::Percent => "percent",
        Event::MemoryAdd => "memory-add",
        Event::MemorySubtract => "memory-subtract",
        Event::MemoryRecall => "memory-recall",
        Event::CopyRequest => "copy",
        Event::ToggleSound => "sound",
        Event::ToggleTheme => "theme",
    };
    format!("btn-{name}")
}

/// The 6×4 calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        const LAYOUT: [[Event; 4]; 6] = [
            [
                Event::MemoryRecall,
                Event::MemoryAdd,
                Event::MemorySubtract,
                Event::Clear,
            ],
            [
                Event::AllClear,
                Event::ToggleSign,
                Event::Percent,
                Event::Operator(Operator::Divide),
            ],
            [
                Event::Digit(7),
                Event::Digit(8),
                Event::Digit(9),
                Event::Operator(Operator::Multiply),
            ],
            [
                Event::Digit(4),
                Event::Digit(5),
                Event::Digit(6),
                Event::Operator(Operator::Subtract),
            ],
            [
                Event::Digit(1),
                Event::Digit(2),
                Event::Digit(3),
                Event::Operator(Operator::Add),
            ],
            [
                Event::Digit(0),
                Event::Decimal,
                Event::CopyRequest,
                Event::Equals,
            ],
        ];

        let buttons = LAYOUT
            .iter()
            .enumerate()
            .flat_map(|(row, events)| {
                events
                    .iter()
                    .enumerate()
                    .map(move |(col, &event)| KeypadButton::new(event, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: LAYOUT.len(),
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Buttons grouped by row
    pub fn rows(&self) -> impl Iterator<Item = &[KeypadButton]> {
        self.buttons.chunks(self.cols)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by its printed label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.label == label)
    }

    /// Resolves a click on element `id` to the button's event
    #[must_use]
    pub fn handle_click(&self, id: &str) -> Option<Event> {
        self.find_button_by_id(id).map(|b| b.event)
    }
}
