//! Composite checks performed by host integrations.
//!
//! Each gate combines one or more table verdicts the way the host asks the
//! question ("can this pawn wear that?") and turns a negative answer into a
//! [`Denial`] suitable for a job-failure message.

use crate::denial::Denial;
use crate::engine::{EligibilityEngine, QueryOptions};
use crate::types::{Fallback, ResourceCategory, RestrictionKind, SubjectFlags};

pub type GateResult = Result<(), Denial>;

#[derive(Clone, Copy)]
pub struct Gates<'a> {
    engine: &'a EligibilityEngine,
}

impl<'a> Gates<'a> {
    pub fn new(engine: &'a EligibilityEngine) -> Self {
        Self { engine }
    }

    fn verdict(
        &self,
        kind: RestrictionKind,
        resource: &str,
        subject: &str,
        options: &QueryOptions,
    ) -> GateResult {
        if self.engine.is_eligible(kind, resource, subject, options) {
            Ok(())
        } else {
            Err(self.engine.explain(kind, resource, subject))
        }
    }

    fn has_flag(&self, subject: &str, flag: SubjectFlags) -> bool {
        self.engine
            .registry()
            .subject(subject)
            .is_some_and(|category| category.flags.contains(flag))
    }

    fn denied_by_subject(&self, kind: RestrictionKind, resource: &str, subject: &str) -> bool {
        self.engine
            .registry()
            .subject(subject)
            .is_some_and(|category| category.denies(kind, resource))
    }

    /// Whether the subject is on the whitelist entry of `resource`. Resources
    /// without a whitelist entry whitelist nobody, and neither does a
    /// whitelist table the engine was not configured with.
    fn whitelisted(&self, whitelist: RestrictionKind, resource: &str, subject: &str) -> bool {
        let options = QueryOptions::new().with_missing_key(Fallback::Deny);
        self.engine
            .check(whitelist, resource, subject, &options)
            .unwrap_or(false)
    }

    /// Restriction verdict, unless a whitelist grants access anyway. Subject
    /// denials on the restriction kind win over both.
    fn restricted_or_whitelisted(
        &self,
        restriction: RestrictionKind,
        whitelist: RestrictionKind,
        resource: &str,
        subject: &str,
    ) -> GateResult {
        if self.denied_by_subject(restriction, resource, subject) {
            return Err(self.engine.explain(restriction, resource, subject));
        }
        if self.whitelisted(whitelist, resource, subject) {
            return Ok(());
        }
        self.verdict(restriction, resource, subject, &QueryOptions::new())
    }

    /// Equip or wear `item`.
    ///
    /// Apparel on the subject's whitelist is always wearable. Subjects flagged
    /// [`SubjectFlags::APPROVED_APPAREL_ONLY`] may wear nothing else; everyone
    /// else falls through to the equipment restrictions.
    pub fn can_equip(&self, item: &str, subject: &str) -> GateResult {
        let is_apparel = self
            .engine
            .registry()
            .resource(item)
            .is_some_and(ResourceCategory::is_apparel);
        if !is_apparel {
            return self.verdict(RestrictionKind::Equipment, item, subject, &QueryOptions::new());
        }

        if self.denied_by_subject(RestrictionKind::Equipment, item, subject) {
            return Err(self.engine.explain(RestrictionKind::Equipment, item, subject));
        }
        if self.whitelisted(RestrictionKind::ApparelWhitelist, item, subject) {
            return Ok(());
        }
        if self.has_flag(subject, SubjectFlags::APPROVED_APPAREL_ONLY) {
            return Err(self
                .engine
                .explain(RestrictionKind::ApparelWhitelist, item, subject));
        }
        self.verdict(RestrictionKind::Equipment, item, subject, &QueryOptions::new())
    }

    pub fn can_eat(&self, food: &str, subject: &str) -> GateResult {
        self.restricted_or_whitelisted(
            RestrictionKind::Consumable,
            RestrictionKind::ConsumableWhitelist,
            food,
            subject,
        )
    }

    pub fn can_build(&self, building: &str, subject: &str) -> GateResult {
        self.restricted_or_whitelisted(
            RestrictionKind::Building,
            RestrictionKind::BuildingWhitelist,
            building,
            subject,
        )
    }

    pub fn can_use_bed(&self, bed: &str, subject: &str) -> GateResult {
        self.verdict(RestrictionKind::Bed, bed, subject, &QueryOptions::new())
    }

    pub fn can_gain_trait(&self, trait_id: &str, subject: &str) -> GateResult {
        self.verdict(RestrictionKind::Trait, trait_id, subject, &QueryOptions::new())
    }

    pub fn can_have_thought(&self, thought: &str, subject: &str) -> GateResult {
        if self.has_flag(subject, SubjectFlags::NO_THOUGHTS) {
            return Err(self
                .engine
                .explain(RestrictionKind::Thought, thought, subject));
        }
        self.verdict(RestrictionKind::Thought, thought, subject, &QueryOptions::new())
    }

    /// Research `project`, narrowed by the research policy of `faction`.
    pub fn can_research(&self, project: &str, subject: &str, faction: Option<&str>) -> GateResult {
        let options = match faction {
            Some(faction) => QueryOptions::new().with_faction(faction),
            None => QueryOptions::new(),
        };
        self.verdict(RestrictionKind::Research, project, subject, &options)
    }

    /// Body-type restrictions plus the subject's own list of body types.
    pub fn can_have_body_type(&self, body: &str, subject: &str) -> GateResult {
        self.verdict(RestrictionKind::BodyType, body, subject, &QueryOptions::new())?;

        let listed = self
            .engine
            .registry()
            .subject(subject)
            .map(|category| category.body_types())
            .unwrap_or_default();
        if listed.is_empty() || listed.iter().any(|id| id.as_str() == body) {
            Ok(())
        } else {
            Err(self.engine.explain(RestrictionKind::BodyType, body, subject))
        }
    }
}
