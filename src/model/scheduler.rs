//! Delayed-effect queue on a caller-supplied clock. The app feeds it
//! `performance.now()`, tests feed it a virtual clock.

#[derive(Clone, Debug)]
struct Pending<E> {
    due_ms: f64,
    seq: u64,
    effect: E,
}

#[derive(Clone, Debug)]
pub struct Scheduler<E> {
    queue: Vec<Pending<E>>,
    seq: u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            queue: Vec::new(),
            seq: 0,
        }
    }
}

impl<E> Scheduler<E> {
    pub fn schedule(&mut self, now_ms: f64, delay_ms: u32, effect: E) {
        self.seq += 1;
        self.queue.push(Pending {
            due_ms: now_ms + delay_ms as f64,
            seq: self.seq,
            effect,
        });
    }

    #[cfg(test)]
    pub fn next_due(&self) -> Option<f64> {
        self.queue.iter().map(|p| p.due_ms).min_by(|a, b| a.total_cmp(b))
    }

    /// Removes every effect due at or before `now_ms`, earliest first; ties keep scheduling order.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<E> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.queue.drain(..).partition(|p| p.due_ms <= now_ms);
        self.queue = rest;
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|p| p.effect).collect()
    }

    /// Pops only the earliest effect, for callers that must re-enter between effects.
    #[cfg(test)]
    pub fn pop_next(&mut self) -> Option<(f64, E)> {
        let idx = self
            .queue
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)))
            .map(|(i, _)| i)?;
        let p = self.queue.remove(idx);
        Some((p.due_ms, p.effect))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_due_order() {
        let mut s = Scheduler::default();
        s.schedule(0.0, 300, "c");
        s.schedule(0.0, 100, "a");
        s.schedule(50.0, 50, "b");
        assert_eq!(s.next_due(), Some(100.0));
        assert_eq!(s.drain_due(99.0), Vec::<&str>::new());
        assert_eq!(s.drain_due(100.0), vec!["a", "b"]);
        assert_eq!(s.len(), 1);
        assert_eq!(s.drain_due(1000.0), vec!["c"]);
        assert!(s.is_empty());
    }

    #[test]
    fn pop_next_respects_insertion_order_on_ties() {
        let mut s = Scheduler::default();
        s.schedule(0.0, 10, 1);
        s.schedule(0.0, 10, 2);
        s.schedule(0.0, 0, 0);
        assert_eq!(s.pop_next(), Some((0.0, 0)));
        assert_eq!(s.pop_next(), Some((10.0, 1)));
        assert_eq!(s.pop_next(), Some((10.0, 2)));
        assert_eq!(s.pop_next(), None);
    }
}
