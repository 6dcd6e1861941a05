// Collection window arithmetic. Pure logic, no I/O.

/// One bounded sub-interval of the global collection range, epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: i64,
    pub end: i64,
}

/// Finite iterator over consecutive fixed-width windows covering
/// `[start, end]`. Consecutive windows share their boundary timestamp; the
/// final window is clipped so its end equals the global end exactly. An empty
/// range yields no windows.
#[derive(Debug, Clone)]
pub struct Windows {
    cursor: i64,
    end: i64,
    width: i64,
}

impl Windows {
    pub fn new(start: i64, end: i64, width: i64) -> Self {
        debug_assert!(width > 0);
        Self {
            cursor: start,
            end,
            width,
        }
    }
}

impl Iterator for Windows {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        if self.cursor >= self.end {
            return None;
        }
        let end = (self.cursor + self.width).min(self.end);
        let window = Window {
            start: self.cursor,
            end,
        };
        self.cursor = end;
        Some(window)
    }
}
