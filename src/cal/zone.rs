//! Time zone rules, and the handles and providers used to look them up.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::cal::datetime::LocalDateTime;
use crate::cal::offset::Offset;
use crate::error::{Error, Result};
use crate::instant::Instant;


/// The offsets that can apply to a local date-time in some zone. See
/// `ZoneRules::classify`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum LocalOffsets {

    /// The local date-time happens exactly once, at this offset.
    Normal(Offset),

    /// The local date-time never happens, because the clocks jumped
    /// forward over it, from the offset before the transition to the one
    /// after it.
    Gap { before: Offset, after: Offset },

    /// The local date-time happens twice, because the clocks went back
    /// over it: once at the earlier offset, then again at the later one.
    Overlap { earlier: Offset, later: Offset },
}

impl LocalOffsets {

    /// Every offset that the local date-time can legally have: none in a
    /// gap, one normally, and two in an overlap.
    pub fn valid_offsets(&self) -> Vec<Offset> {
        match *self {
            LocalOffsets::Normal(offset)               => vec![ offset ],
            LocalOffsets::Gap { .. }                   => Vec::new(),
            LocalOffsets::Overlap { earlier, later }   => vec![ earlier, later ],
        }
    }

    pub fn is_valid_offset(&self, offset: Offset) -> bool {
        match *self {
            LocalOffsets::Normal(only)                 => only == offset,
            LocalOffsets::Gap { .. }                   => false,
            LocalOffsets::Overlap { earlier, later }   => earlier == offset || later == offset,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, LocalOffsets::Gap { .. })
    }

    pub fn is_overlap(&self) -> bool {
        matches!(self, LocalOffsets::Overlap { .. })
    }
}


/// The **rules** for a time zone say what offset from UTC is in effect at
/// each point in time.
pub trait ZoneRules: fmt::Debug + Send + Sync {

    /// Works out which offsets a local date-time can have in this zone.
    fn classify(&self, local: LocalDateTime) -> LocalOffsets;

    /// The single offset in effect at an instant.
    fn offset_at(&self, instant: Instant) -> Offset;

    fn valid_offsets(&self, local: LocalDateTime) -> Vec<Offset> {
        self.classify(local).valid_offsets()
    }

    fn is_valid_offset(&self, local: LocalDateTime, offset: Offset) -> bool {
        self.classify(local).is_valid_offset(offset)
    }

    /// Whether these rules always give the same offset.
    fn is_fixed(&self) -> bool {
        false
    }
}


/// Zone rules given as a table: an initial offset, followed by the
/// instants at which the offset changes and the offsets they change to.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TransitionRules {

    /// The offset in effect up until the first transition, if any.
    first: Offset,

    /// The transitions, in order, each as a Unix timestamp paired with the
    /// offset in effect from that second onwards.
    rest: Vec<(i64, Offset)>,
}

impl TransitionRules {

    /// Creates a set of rules from an initial offset and the transitions
    /// away from it. Transitions that don’t change the offset are dropped.
    pub fn new(first: Offset, transitions: Vec<(i64, Offset)>) -> Self {
        let mut rest: Vec<(i64, Offset)> = Vec::with_capacity(transitions.len());
        let mut previous = first;

        for (at, offset) in transitions {
            if offset != previous {
                rest.push((at, offset));
                previous = offset;
            }
        }

        Self { first, rest }
    }

    pub fn fixed(offset: Offset) -> Self {
        Self { first: offset, rest: Vec::new() }
    }

    pub fn transitions(&self) -> &[(i64, Offset)] {
        &self.rest
    }
}

impl ZoneRules for TransitionRules {
    fn classify(&self, local: LocalDateTime) -> LocalOffsets {
        let local_second = local.to_epoch_second(Offset::UTC);
        let mut before = self.first;

        for &(at, after) in &self.rest {
            let starts = at + i64::from(before.total_seconds());
            let ends   = at + i64::from(after.total_seconds());

            if after > before {
                if local_second < starts {
                    return LocalOffsets::Normal(before);
                }
                else if local_second < ends {
                    return LocalOffsets::Gap { before, after };
                }
            }
            else if local_second < ends {
                return LocalOffsets::Normal(before);
            }
            else if local_second < starts {
                return LocalOffsets::Overlap { earlier: before, later: after };
            }

            before = after;
        }

        LocalOffsets::Normal(before)
    }

    fn offset_at(&self, instant: Instant) -> Offset {
        let seconds = instant.seconds();
        match self.rest.partition_point(|&(at, _)| at <= seconds) {
            0 => self.first,
            n => self.rest[n - 1].1,
        }
    }

    fn is_fixed(&self) -> bool {
        self.rest.is_empty()
    }
}


/// A **time zone** handle: either a fixed offset, or a named region along
/// with the rules it follows.
#[derive(Debug, Clone)]
pub struct TimeZone(pub TimeZoneSource);

#[derive(Debug, Clone)]
pub enum TimeZoneSource {
    Fixed(Offset),
    Region { id: Arc<str>, rules: Arc<dyn ZoneRules> },
}

impl TimeZone {

    pub fn fixed(offset: Offset) -> Self {
        TimeZone(TimeZoneSource::Fixed(offset))
    }

    pub fn utc() -> Self {
        Self::fixed(Offset::UTC)
    }

    pub fn region(id: impl Into<Arc<str>>, rules: Arc<dyn ZoneRules>) -> Self {
        TimeZone(TimeZoneSource::Region { id: id.into(), rules })
    }

    /// Looks up a zone by its identifier. Offsets such as `+01:00` and `Z`
    /// give fixed zones; `UTC`, `GMT`, and `UT`, optionally followed by an
    /// offset, give regions with fixed rules unless the provider knows
    /// better; anything else has to be known to the provider.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendric::zone::{TimeZone, ZoneRegistry};
    ///
    /// let zones = ZoneRegistry::new();
    /// assert_eq!(TimeZone::of("+05:30", &zones).unwrap().id(), "+05:30");
    /// assert_eq!(TimeZone::of("UTC", &zones).unwrap().id(), "UTC");
    /// assert!(TimeZone::of("Mars/Olympus_Mons", &zones).is_err());
    /// ```
    pub fn of(id: &str, provider: &dyn ZoneProvider) -> Result<Self> {
        if id == "Z" || id.starts_with('+') || id.starts_with('-') {
            return Ok(Self::fixed(id.parse()?));
        }

        match provider.rules_for(id) {
            Ok(rules) => Ok(Self::region(id, rules)),
            Err(Error::UnknownZone(_)) => Self::universal(id),
            Err(e) => Err(e),
        }
    }

    /// The zones named after universal time, which need no provider.
    fn universal(id: &str) -> Result<Self> {
        for prefix in ["UTC", "GMT", "UT"] {
            if let Some(suffix) = id.strip_prefix(prefix) {
                if suffix.is_empty() {
                    return Ok(Self::region(id, Arc::new(Offset::UTC)));
                }
                else if suffix.starts_with('+') || suffix.starts_with('-') {
                    let offset: Offset = suffix.parse().map_err(|_| Error::UnknownZone(id.to_owned()))?;
                    return Ok(Self::region(id, Arc::new(offset)));
                }
            }
        }

        Err(Error::UnknownZone(id.to_owned()))
    }

    /// This zone’s identifier, such as “Europe/Paris” or “+01:00”.
    pub fn id(&self) -> Cow<'_, str> {
        match self.0 {
            TimeZoneSource::Fixed(offset)        => Cow::Owned(offset.to_string()),
            TimeZoneSource::Region { ref id, .. } => Cow::Borrowed(&**id),
        }
    }

    pub fn rules(&self) -> &dyn ZoneRules {
        match self.0 {
            TimeZoneSource::Fixed(ref offset)        => offset,
            TimeZoneSource::Region { ref rules, .. } => &**rules,
        }
    }

    /// The offset this zone is fixed to, if it’s a plain offset rather than
    /// a region.
    pub fn as_offset(&self) -> Option<Offset> {
        match self.0 {
            TimeZoneSource::Fixed(offset)    => Some(offset),
            TimeZoneSource::Region { .. }    => None,
        }
    }
}

impl PartialEq for TimeZone {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (TimeZoneSource::Fixed(a), TimeZoneSource::Fixed(b))                           => a == b,
            (TimeZoneSource::Region { id: a, .. }, TimeZoneSource::Region { id: b, .. })   => a == b,
            _                                                                              => false,
        }
    }
}

impl Eq for TimeZone {}

impl Hash for TimeZone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.id())
    }
}


/// Something that can hand out the rules for a zone, given its identifier.
pub trait ZoneProvider: Send + Sync {

    /// Returns the rules for the zone, or `UnknownZone` if there are none.
    fn rules_for(&self, id: &str) -> Result<Arc<dyn ZoneRules>>;
}

type Loader = Box<dyn Fn(&str) -> Option<Arc<dyn ZoneRules>> + Send + Sync>;

/// A zone provider that keeps its rules in memory, optionally loading
/// missing ones on demand. Rules are only ever loaded once per identifier.
#[derive(Default)]
pub struct ZoneRegistry {
    cache: RwLock<HashMap<String, Arc<dyn ZoneRules>>>,
    loader: Option<Loader>,
}

impl ZoneRegistry {

    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry that asks the loader for any zone it hasn’t seen
    /// yet, and remembers the answer.
    pub fn with_loader<F>(loader: F) -> Self
    where F: Fn(&str) -> Option<Arc<dyn ZoneRules>> + Send + Sync + 'static
    {
        Self { cache: RwLock::default(), loader: Some(Box::new(loader)) }
    }

    /// Adds the rules for a zone, replacing any that were there before.
    pub fn insert(&self, id: impl Into<String>, rules: Arc<dyn ZoneRules>) {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let _ = cache.insert(id.into(), rules);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).contains_key(id)
    }
}

impl ZoneProvider for ZoneRegistry {
    fn rules_for(&self, id: &str) -> Result<Arc<dyn ZoneRules>> {
        if let Some(rules) = self.cache.read().unwrap_or_else(PoisonError::into_inner).get(id) {
            return Ok(Arc::clone(rules));
        }

        let loaded = self.loader.as_ref().and_then(|load| load(id));
        match loaded {
            Some(rules) => {
                debug!(zone = id, "loaded zone rules");
                let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
                Ok(Arc::clone(cache.entry(id.to_owned()).or_insert(rules)))
            }
            None => Err(Error::UnknownZone(id.to_owned())),
        }
    }
}

impl fmt::Debug for ZoneRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        let mut ids: Vec<&String> = cache.keys().collect();
        ids.sort();

        f.debug_struct("ZoneRegistry")
         .field("zones", &ids)
         .field("loader", &self.loader.is_some())
         .finish()
    }
}
