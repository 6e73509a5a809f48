//! The immutable category-to-jokes dataset.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::category::CategoryName;
use crate::error::DatasetError;

/// One category and its jokes, in the on-disk dataset format.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEntry {
    pub category: CategoryName,
    pub jokes: Vec<String>,
}

/// Mapping from category to a non-empty, ordered list of jokes.
///
/// Built once at startup and never mutated. Every category is guaranteed to
/// have at least one joke, so selection never has to handle an empty list.
/// Categories keep the order they were supplied in.
#[derive(Debug, Clone)]
pub struct JokeDataset {
    entries: Vec<CategoryEntry>,
}

impl JokeDataset {
    /// Builds a dataset from `(category, jokes)` pairs.
    ///
    /// Fails if there are no categories, a category name is blank or repeated,
    /// or a category has no jokes.
    pub fn new<I, C, J>(entries: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = (C, Vec<J>)>,
        C: Into<CategoryName>,
        J: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(category, jokes)| CategoryEntry {
                category: category.into(),
                jokes: jokes.into_iter().map(Into::into).collect(),
            })
            .collect();
        Self::from_entries(entries)
    }

    fn from_entries(entries: Vec<CategoryEntry>) -> Result<Self, DatasetError> {
        if entries.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.category.is_blank() {
                return Err(DatasetError::BlankCategory);
            }
            if !seen.insert(entry.category.as_str()) {
                return Err(DatasetError::DuplicateCategory(entry.category.clone()));
            }
            if entry.jokes.is_empty() {
                return Err(DatasetError::EmptyCategory(entry.category.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Parses a dataset from a JSON array of `{"category", "jokes"}` objects.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let entries: Vec<CategoryEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Reads and parses a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The built-in dataset: four categories with two jokes each.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(category, jokes)| CategoryEntry {
                    category: CategoryName::from(*category),
                    jokes: jokes.iter().map(|j| j.to_string()).collect(),
                })
                .collect(),
        }
    }

    /// Returns the category names in dataset order.
    pub fn categories(&self) -> impl Iterator<Item = &CategoryName> {
        self.entries.iter().map(|e| &e.category)
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the dataset has no categories.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `category` is a key of the dataset.
    pub fn contains(&self, category: &str) -> bool {
        self.jokes(category).is_some()
    }

    /// Returns the jokes for a category, or `None` if it is unknown.
    pub fn jokes(&self, category: &str) -> Option<&[String]> {
        self.entry(category).map(|e| e.jokes.as_slice())
    }

    /// Returns the entry for a category, or `None` if it is unknown.
    pub(crate) fn entry(&self, category: &str) -> Option<&CategoryEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    pub(crate) fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }
}

impl Default for JokeDataset {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN: &[(&str, &[&str])] = &[
    (
        "糗事",
        &[
            "今天在超市看到一个长得很凶的大哥，他买了一袋小番茄，一颗颗往嘴里扔，没接住就弯腰去捡。我看他捡了三次，忍不住说：“大哥，用勺子吧？” 他瞪了我一眼：“我乐意，你管得着吗？” 然后下一颗又掉了，他默默从兜里掏出了勺子……",
            "小时候偷穿妈妈的高跟鞋，结果摔了一跤，把牙磕掉了一小块。现在每次相亲，对方都会问：“你牙齿怎么缺了一点？” 我总不能说：“这是我为时尚付出的代价吧……”",
        ],
    ),
    (
        "冷笑话",
        &[
            "为什么数学书总是很忧郁？因为它有太多的问题。",
            "什么水果最让人感到害怕？—— 芒果，因为“芒”（盲）目的害怕。",
        ],
    ),
    (
        "职场",
        &[
            "老板：“这个项目你加班赶一下，明天必须交。” 我：“好的老板，不过我加班的话，明天可能起不来，上午就没法交了。” 老板：“……”",
            "同事问我：“你上班为什么总带着保温杯？” 我说：“因为我随时可能‘凉’了。”",
        ],
    ),
    (
        "校园",
        &[
            "老师：“请用‘一带一路’造句。” 学生：“我家一带一路灯坏了。” 老师：“……”",
            "考试时同桌偷偷问我：“这道题选什么？” 我告诉他：“选C。” 结果他选了B，还抱怨我骗他。后来我才发现，他看的是我的答题卡背面……",
        ],
    ),
];
