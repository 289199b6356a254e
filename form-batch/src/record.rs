//! Form records and batch construction

use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Number of records built and submitted per run
pub const BATCH_SIZE: usize = 10;

/// Tags are drawn uniformly from `0..TAG_RANGE`
pub const TAG_RANGE: u32 = 1024;

/// Comment label the tag is appended to
pub const COMMENT_LABEL: &str = "buffer Levchikov";

/// Random differentiator embedded in a record's comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag(u32);

impl Tag {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Draw a tag in `0..TAG_RANGE`
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..TAG_RANGE))
    }

    /// The comment text carrying this tag
    pub fn comment(self, label: &str) -> String {
        format!("{}{}", label, self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field values shared by every record in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTemplate {
    pub period_start: String,
    pub period_end: String,
    pub period_key: String,
    pub indicator_to_mo_id: i64,
    pub indicator_to_mo_fact_id: i64,
    pub value: i64,
    pub fact_time: String,
    pub is_plan: i32,
    pub auth_user_id: i64,
    pub comment_label: String,
}

impl Default for RecordTemplate {
    fn default() -> Self {
        Self {
            period_start: "2024-05-01".into(),
            period_end: "2024-05-31".into(),
            period_key: "month".into(),
            indicator_to_mo_id: 227373,
            indicator_to_mo_fact_id: 0,
            value: 1,
            fact_time: "2024-05-31".into(),
            is_plan: 0,
            auth_user_id: 40,
            comment_label: COMMENT_LABEL.into(),
        }
    }
}

/// One unit of form data for the save endpoint
///
/// Field order is the wire order of the url-encoded body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    period_start: String,
    period_end: String,
    period_key: String,
    indicator_to_mo_id: i64,
    indicator_to_mo_fact_id: i64,
    value: i64,
    fact_time: String,
    is_plan: i32,
    auth_user_id: i64,
    comment: String,
    #[serde(skip)]
    tag: Tag,
}

impl Record {
    pub fn new(template: &RecordTemplate, tag: Tag) -> Self {
        Self {
            period_start: template.period_start.clone(),
            period_end: template.period_end.clone(),
            period_key: template.period_key.clone(),
            indicator_to_mo_id: template.indicator_to_mo_id,
            indicator_to_mo_fact_id: template.indicator_to_mo_fact_id,
            value: template.value,
            fact_time: template.fact_time.clone(),
            is_plan: template.is_plan,
            auth_user_id: template.auth_user_id,
            comment: tag.comment(&template.comment_label),
            tag,
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Read-endpoint criteria selecting this record's period and indicator
    pub fn query(&self) -> RecordQuery {
        RecordQuery {
            period_start: self.period_start.clone(),
            period_end: self.period_end.clone(),
            period_key: self.period_key.clone(),
            indicator_to_mo_id: self.indicator_to_mo_id,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} {} {} {} {} {} {} {} {} {}}}",
            self.period_start,
            self.period_end,
            self.period_key,
            self.indicator_to_mo_id,
            self.indicator_to_mo_fact_id,
            self.value,
            self.fact_time,
            self.is_plan,
            self.auth_user_id,
            self.comment
        )
    }
}

/// Form body for the read endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordQuery {
    pub period_start: String,
    pub period_end: String,
    pub period_key: String,
    pub indicator_to_mo_id: i64,
}

/// Records built together, with their tags in generation order
#[derive(Debug, Clone)]
pub struct Batch {
    records: Vec<Record>,
}

impl Batch {
    /// Build `size` records from `template`, each with a fresh random tag
    ///
    /// Tags are not deduplicated; two equal tags make verification
    /// require two matching rows.
    pub fn build<R: Rng>(template: &RecordTemplate, size: usize, rng: &mut R) -> Self {
        let records = (0..size)
            .map(|_| Record::new(template, Tag::random(rng)))
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn tags(&self) -> Vec<Tag> {
        self.records.iter().map(Record::tag).collect()
    }

    /// Expected comments in generation order
    pub fn expected_comments(&self) -> Vec<String> {
        self.records.iter().map(|r| r.comment.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_build_batch_size_and_comments() {
        let mut rng = StdRng::seed_from_u64(7);
        let batch = Batch::build(&RecordTemplate::default(), BATCH_SIZE, &mut rng);

        assert_eq!(batch.len(), BATCH_SIZE);
        for record in batch.records() {
            let tag = record
                .comment()
                .strip_prefix(COMMENT_LABEL)
                .expect("comment starts with label");
            let tag: u32 = tag.parse().unwrap();
            assert!(tag < TAG_RANGE);
            assert_eq!(tag, record.tag().value());
        }
    }

    #[test]
    fn test_records_share_template_fields() {
        let mut rng = StdRng::seed_from_u64(1);
        let batch = Batch::build(&RecordTemplate::default(), 3, &mut rng);
        let queries: Vec<_> = batch.records().iter().map(Record::query).collect();
        assert!(queries.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(queries[0].indicator_to_mo_id, 227373);
        assert_eq!(queries[0].period_key, "month");
    }

    #[test]
    fn test_tags_in_generation_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let batch = Batch::build(&RecordTemplate::default(), 5, &mut rng);
        let tags = batch.tags();
        let comments = batch.expected_comments();
        for (tag, comment) in tags.iter().zip(&comments) {
            assert_eq!(&tag.comment(COMMENT_LABEL), comment);
        }
    }

    #[test]
    fn test_expected_comments_use_template_label() {
        let template = RecordTemplate {
            comment_label: "nightly check ".into(),
            ..RecordTemplate::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        let batch = Batch::build(&template, 4, &mut rng);
        for (comment, tag) in batch.expected_comments().iter().zip(batch.tags()) {
            assert_eq!(comment, &format!("nightly check {}", tag));
        }
    }

    #[test]
    fn test_comment_has_no_separator() {
        assert_eq!(Tag::new(17).comment("label"), "label17");
    }

    #[test]
    fn test_empty_batch() {
        let mut rng = StdRng::seed_from_u64(0);
        let batch = Batch::build(&RecordTemplate::default(), 0, &mut rng);
        assert!(batch.is_empty());
        assert!(batch.first().is_none());
    }
}
