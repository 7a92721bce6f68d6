//! Randomized school dataset.
//!
//! Builds one school, a pool of students, a handful of teachers and a few
//! groups per teacher. Each group holds its teacher plus a contiguous slice of
//! the student pool; the slice size is shrunk by a small random offset, so some
//! students may end up in no group at all.

use rand::Rng;
use school_seed_shared::{Dataset, GroupRecord, LogicalGraph, Role, SchoolRecord, UserRecord};
use std::ops::{Range, RangeInclusive};
use tracing::info;
use uuid::{Builder, Uuid};

use crate::config::{GROUPS_PER_TEACHER_RANGE, RATIO_DIVISOR_RANGE, SCHOOL_NAME, USER_COUNT_RANGE};
use crate::errors::SeedError;

/// Shrink applied to the students-per-group slice, drawn from this range.
const SLICE_OFFSET_RANGE: Range<usize> = 0..2;

/// Size ranges for randomized generation. Every range is inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomParams {
    /// Number of students.
    pub user_count: RangeInclusive<usize>,
    /// Students per teacher; `teacherCount = ceil(userCount / divisor)`.
    pub ratio_divisor: RangeInclusive<usize>,
    /// Groups owned by each teacher.
    pub groups_per_teacher: RangeInclusive<usize>,
}

impl Default for RandomParams {
    fn default() -> Self {
        Self {
            user_count: USER_COUNT_RANGE,
            ratio_divisor: RATIO_DIVISOR_RANGE,
            groups_per_teacher: GROUPS_PER_TEACHER_RANGE,
        }
    }
}

impl RandomParams {
    /// Parameters that always pick the given values.
    pub fn exact(user_count: usize, ratio_divisor: usize, groups_per_teacher: usize) -> Self {
        Self {
            user_count: user_count..=user_count,
            ratio_divisor: ratio_divisor..=ratio_divisor,
            groups_per_teacher: groups_per_teacher..=groups_per_teacher,
        }
    }

    fn validate(&self) -> Result<(), SeedError> {
        for (name, range) in [
            ("user count", &self.user_count),
            ("ratio divisor", &self.ratio_divisor),
            ("groups per teacher", &self.groups_per_teacher),
        ] {
            if range.is_empty() {
                return Err(SeedError::config(format!(
                    "Empty {} range {}..={}",
                    name,
                    range.start(),
                    range.end()
                )));
            }
        }

        if *self.ratio_divisor.start() == 0 {
            return Err(SeedError::config("Ratio divisor must be at least 1"));
        }

        Ok(())
    }
}

/// Counts picked for one generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomShape {
    pub user_count: usize,
    pub teacher_count: usize,
    pub groups_per_teacher: usize,
    pub students_per_group: usize,
}

impl RandomShape {
    pub fn group_count(&self) -> usize {
        self.teacher_count * self.groups_per_teacher
    }
}

fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let uuid: Uuid = Builder::from_random_bytes(rng.gen()).into_uuid();
    uuid.to_string()
}

/// Pick the dataset shape from `params`.
pub fn pick_shape<R: Rng + ?Sized>(params: &RandomParams, rng: &mut R) -> Result<RandomShape, SeedError> {
    params.validate()?;

    let user_count = rng.gen_range(params.user_count.clone());
    let ratio_divisor = rng.gen_range(params.ratio_divisor.clone());
    let groups_per_teacher = rng.gen_range(params.groups_per_teacher.clone());
    let teacher_count = user_count.div_ceil(ratio_divisor);

    let total_groups = teacher_count * groups_per_teacher;
    let students_per_group = if total_groups == 0 {
        0
    } else {
        (user_count / total_groups).saturating_sub(rng.gen_range(SLICE_OFFSET_RANGE))
    };

    Ok(RandomShape {
        user_count,
        teacher_count,
        groups_per_teacher,
        students_per_group,
    })
}

/// Build a dataset of the given shape.
pub fn build_dataset<R: Rng + ?Sized>(shape: &RandomShape, rng: &mut R) -> Dataset {
    let school = SchoolRecord {
        id: random_id(rng),
        name: SCHOOL_NAME.to_string(),
    };

    let students: Vec<UserRecord> = (0..shape.user_count)
        .map(|i| UserRecord {
            id: random_id(rng),
            username: format!("Student {}", i),
            school_id: school.id.clone(),
            role: Role::Student,
        })
        .collect();

    let mut teachers = Vec::with_capacity(shape.teacher_count);
    let mut groups = Vec::with_capacity(shape.group_count());

    for i in 0..shape.teacher_count {
        let teacher = UserRecord {
            id: random_id(rng),
            username: format!("Teacher {}", i),
            school_id: school.id.clone(),
            role: Role::Teacher,
        };

        for j in 0..shape.groups_per_teacher {
            let group_num = i * shape.groups_per_teacher + j;
            let start = (shape.students_per_group * group_num).min(students.len());
            let end = (start + shape.students_per_group).min(students.len());

            let mut users = Vec::with_capacity(1 + end - start);
            users.push(teacher.id.clone());
            users.extend(students[start..end].iter().map(|s| s.id.clone()));

            groups.push(GroupRecord {
                id: random_id(rng),
                name: format!("Group {}", group_num),
                users,
            });
        }

        teachers.push(teacher);
    }

    let mut users = students;
    users.extend(teachers);

    Dataset {
        schools: vec![school],
        users,
        groups,
    }
}

/// Generate a randomized logical graph.
pub fn generate_random<R: Rng + ?Sized>(
    params: &RandomParams,
    rng: &mut R,
) -> Result<LogicalGraph, SeedError> {
    let shape = pick_shape(params, rng)?;
    let dataset = build_dataset(&shape, rng);

    info!(
        students_per_group = shape.students_per_group,
        "Created randomized data for: {} users, {} teachers, and {} groups",
        dataset.count_role(Role::Student),
        dataset.count_role(Role::Teacher),
        dataset.groups.len()
    );

    Ok(LogicalGraph::try_from(dataset)?)
}
