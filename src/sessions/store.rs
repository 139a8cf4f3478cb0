pub(crate) type SessionId = u32;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Status {
    Incomplete,
    Completed,
    Failed,
}

impl Status {
    /// The next status in the cycle incomplete → completed → failed →
    /// incomplete
    pub(crate) fn next(self) -> Status {
        match self {
            Status::Incomplete => Status::Completed,
            Status::Completed => Status::Failed,
            Status::Failed => Status::Incomplete,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Session {
    pub(crate) id: SessionId,
    pub(crate) status: Status,
}

/// Which sessions a fresh list starts out with
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Seed {
    #[default]
    Demo,
    Empty,
}

impl Seed {
    pub(crate) fn sessions(self) -> Vec<Session> {
        match self {
            Seed::Demo => vec![
                Session {
                    id: 1,
                    status: Status::Completed,
                },
                Session {
                    id: 2,
                    status: Status::Completed,
                },
                Session {
                    id: 3,
                    status: Status::Incomplete,
                },
                Session {
                    id: 4,
                    status: Status::Failed,
                },
                Session {
                    id: 5,
                    status: Status::Incomplete,
                },
            ],
            Seed::Empty => Vec::new(),
        }
    }
}

/// The ordered list of sessions.  Operations on ids that are not in the list
/// do nothing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct SessionStore(Vec<Session>);

impl SessionStore {
    pub(crate) fn new(seed: Seed) -> Self {
        SessionStore(seed.sessions())
    }

    pub(crate) fn sessions(&self) -> &[Session] {
        &self.0
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn get(&self, id: SessionId) -> Option<&Session> {
        self.0.iter().find(|s| s.id == id)
    }

    /// Append a new incomplete session numbered one past the highest id in
    /// use and return its id
    pub(crate) fn add(&mut self) -> SessionId {
        let id = self.0.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        self.0.push(Session {
            id,
            status: Status::Incomplete,
        });
        id
    }

    pub(crate) fn toggle(&mut self, id: SessionId) {
        if let Some(s) = self.0.iter_mut().find(|s| s.id == id) {
            s.status = s.status.next();
        }
    }

    pub(crate) fn remove(&mut self, id: SessionId) {
        self.0.retain(|s| s.id != id);
    }

    /// Discard all sessions in favor of `sessions`
    pub(crate) fn replace(&mut self, sessions: Vec<Session>) {
        self.0 = sessions;
    }

    pub(crate) fn progress(&self) -> Progress {
        Progress::new(
            self.0
                .iter()
                .filter(|s| s.status == Status::Completed)
                .count(),
            self.0.len(),
        )
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Progress {
    pub(crate) completed: usize,
    pub(crate) total: usize,
    /// `completed / total` as a percentage rounded half up, or 0 if there are
    /// no sessions
    pub(crate) percentage: u8,
}

impl Progress {
    pub(crate) fn new(completed: usize, total: usize) -> Progress {
        let percentage = if total == 0 {
            0
        } else {
            // round(100 * completed / total) in integers
            let pct = (completed.saturating_mul(200) + total) / total.saturating_mul(2);
            u8::try_from(pct).unwrap_or(100)
        };
        Progress {
            completed,
            total,
            percentage,
        }
    }

    /// How much of a ring `circumference` cells long is left unfilled.  This
    /// is the ring's dash offset: `circumference - percentage% of
    /// circumference`, rounded to whole cells.
    pub(crate) fn dash_offset(&self, circumference: u16) -> u16 {
        let filled = (u32::from(self.percentage) * u32::from(circumference) + 50) / 100;
        circumference.saturating_sub(u16::try_from(filled).unwrap_or(circumference))
    }
}
