use std::collections::HashMap;

use super::kinds::{CodeSpan, Emphasis, Link};

/// What the inline parser has learned about closers to the right.
///
/// One instance lives for one `parse_inline` pass over `s`. Bracket pairs
/// and backtick runs are indexed on first use; literal closers and emphasis
/// closers remember the position past which a search already came up empty.
/// Every offset taken or returned here is absolute within `s`.
pub struct Closers<'a> {
    s: &'a str,
    pairs: HashMap<u8, HashMap<usize, usize>>,
    tick_runs: Option<HashMap<usize, Vec<usize>>>,
    /// Closer text mapped to the offset from which it is known to be absent.
    missing: HashMap<&'static str, usize>,
    /// `(delimiter, strong)` mapped to the offset from which no closer exists.
    missing_emphasis: HashMap<(u8, bool), usize>,
    /// Last delimiter run measured: `(delimiter, start, end)`.
    last_run: Option<(u8, usize, usize)>,
}

impl<'a> Closers<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            s,
            pairs: HashMap::new(),
            tick_runs: None,
            missing: HashMap::new(),
            missing_emphasis: HashMap::new(),
            last_run: None,
        }
    }

    /// The `close` bracket balancing the `open` at `at`.
    pub fn matching(&mut self, at: usize, open: u8, close: u8) -> Option<usize> {
        let s = self.s;
        self.pairs
            .entry(open)
            .or_insert_with(|| Link::match_pairs(s, open, close))
            .get(&at)
            .copied()
    }

    /// Start of the first run of exactly `len` backticks at or after `from`.
    pub fn tick_run(&mut self, from: usize, len: usize) -> Option<usize> {
        let s = self.s;
        let starts = self
            .tick_runs
            .get_or_insert_with(|| Self::index_tick_runs(s))
            .get(&len)?;
        starts.get(starts.partition_point(|&start| start < from)).copied()
    }

    fn index_tick_runs(s: &str) -> HashMap<usize, Vec<usize>> {
        let b = s.as_bytes();
        let mut runs: HashMap<usize, Vec<usize>> = HashMap::new();
        let mut i = 0;
        while i < b.len() {
            if b[i] != CodeSpan::TICK {
                i += 1;
                continue;
            }
            let len = b[i..].iter().take_while(|&&x| x == CodeSpan::TICK).count();
            runs.entry(len).or_default().push(i);
            i += len;
        }
        runs
    }

    /// First occurrence of `pat` at or after `from`.
    pub fn literal(&mut self, from: usize, pat: &'static str) -> Option<usize> {
        if self.missing.get(pat).is_some_and(|&mark| from >= mark) {
            return None;
        }
        match self.s.get(from..).and_then(|rest| rest.find(pat)) {
            Some(offset) => Some(from + offset),
            None => {
                self.missing.insert(pat, from);
                None
            }
        }
    }

    /// Closer for strong or emphasis content starting at `from`, as an
    /// offset relative to `from`.
    ///
    /// After one search has failed, a later one can only succeed inside the
    /// delimiter run it starts in: every run beyond that was already
    /// stepped through from its first delimiter.
    pub fn emphasis(&mut self, from: usize, delim: u8, strong: bool) -> Option<usize> {
        let key = (delim, strong);
        if self
            .missing_emphasis
            .get(&key)
            .is_some_and(|&mark| from >= mark)
        {
            if self.s.as_bytes().get(from) != Some(&delim) {
                return None;
            }
            let end = self.run_end(from, delim);
            let next = self.s[end..].chars().next();
            return Emphasis::close_within_run(delim, end - from, next, strong);
        }

        let content = self.s.get(from..)?;
        let found = if strong {
            Emphasis::find_strong_close(content, delim)
        } else {
            Emphasis::find_emphasis_close(content, delim)
        };
        if found.is_none() {
            self.missing_emphasis.insert(key, from);
        }
        found
    }

    /// End of the run of `delim` that covers `at`.
    fn run_end(&mut self, at: usize, delim: u8) -> usize {
        if let Some((d, start, end)) = self.last_run
            && d == delim
            && (start..end).contains(&at)
        {
            return end;
        }
        let len = self.s.as_bytes()[at..]
            .iter()
            .take_while(|&&b| b == delim)
            .count();
        self.last_run = Some((delim, at, at + len));
        at + len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_are_matched_by_position() {
        let mut closers = Closers::new("[a [b]](c)");
        assert_eq!(closers.matching(0, b'[', b']'), Some(6));
        assert_eq!(closers.matching(3, b'[', b']'), Some(5));
        assert_eq!(closers.matching(7, b'(', b')'), Some(9));
        assert_eq!(closers.matching(1, b'[', b']'), None);
    }

    #[test]
    fn tick_runs_need_the_exact_length() {
        let mut closers = Closers::new("``a ` b``");
        assert_eq!(closers.tick_run(2, 2), Some(7));
        assert_eq!(closers.tick_run(2, 1), Some(4));
        assert_eq!(closers.tick_run(5, 1), None);
        assert_eq!(closers.tick_run(0, 3), None);
    }

    #[test]
    fn literal_search_remembers_misses() {
        let mut closers = Closers::new("a ~~ b");
        assert_eq!(closers.literal(0, "~~"), Some(2));
        assert_eq!(closers.literal(4, "~~"), None);
        assert_eq!(closers.literal(5, "~~"), None);
        assert_eq!(closers.literal(0, "~~"), Some(2));
    }

    #[test]
    fn emphasis_after_a_miss_only_checks_its_own_run() {
        let s = "*a **b";
        let mut closers = Closers::new(s);
        assert_eq!(closers.emphasis(1, b'*', false), None);
        // From inside the `**` run a single closer is the run's last star.
        assert_eq!(closers.emphasis(4, b'*', false), Some(0));
        assert_eq!(closers.emphasis(5, b'*', false), None);
    }
}
