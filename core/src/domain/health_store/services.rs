use std::sync::{
    Arc, Mutex, PoisonError, RwLock, RwLockReadGuard,
    atomic::{AtomicU64, Ordering},
};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::{
    analysis::entities::{FoodAnalysis, FoodAnalysisDraft, SymptomAnalysis, SymptomAnalysisDraft},
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    health_store::{
        entities::{ChangeKind, Collection, HealthState, StoreChange, SubscriptionId},
        ports::StoreObserver,
    },
    meal::entities::{Meal, MealTolerance, NewMeal, NewMealTolerance},
    plan::entities::{
        FitnessPlan, FitnessPlanDraft, HealthPlan, NewHealthPlan, NutritionPlan,
        NutritionPlanDraft,
    },
    profile::{entities::UserProfile, value_objects::UserProfileUpdate},
    storage::{
        ports::KeyValueStorage,
        services::{load_document, save_document},
        value_objects::HEALTH_STORAGE_KEY,
    },
    symptom::entities::{NewSymptom, Symptom},
};

/// Version of the `health-storage` document layout.
pub const HEALTH_STORE_VERSION: u32 = 1;

/// Entities that live in a store collection.
pub trait Identified {
    fn id(&self) -> Uuid;
}

macro_rules! identified {
    ($($entity:ty),+ $(,)?) => {
        $(impl Identified for $entity {
            fn id(&self) -> Uuid {
                self.id
            }
        })+
    };
}

identified!(
    Symptom,
    Meal,
    MealTolerance,
    HealthPlan,
    NutritionPlan,
    FitnessPlan,
    SymptomAnalysis,
    FoodAnalysis,
);

enum Mutation<T> {
    Changed { output: T, id: Option<Uuid> },
    Unchanged(T),
}

/// On-disk shape of `health-storage`: the collections plus the revision
/// counter, so revisions keep increasing across restarts.
#[derive(Default, Serialize, Deserialize)]
struct HealthDocument {
    #[serde(flatten)]
    state: HealthState,
    #[serde(default)]
    revision: u64,
}

struct StoreInner {
    state: HealthState,
    revision: u64,
}

/// The persisted health store.
///
/// Every mutation runs under one write lock: the new state is built, written
/// to storage in full, swapped in, and only then are observers notified. A
/// failed write leaves the in-memory state untouched.
///
/// Commits are serialised end to end by `commit_order`, so observers see
/// changes in strictly increasing revision order.
pub struct HealthStore<S: KeyValueStorage> {
    storage: S,
    inner: RwLock<StoreInner>,
    commit_order: Mutex<()>,
    observers: RwLock<Vec<(SubscriptionId, Arc<dyn StoreObserver>)>>,
    next_subscription: AtomicU64,
}

impl<S: KeyValueStorage> HealthStore<S> {
    /// Rehydrates the store from `health-storage`, or starts empty.
    pub fn new(storage: S) -> Self {
        let HealthDocument { state, revision } =
            load_document(&storage, HEALTH_STORAGE_KEY, HEALTH_STORE_VERSION);

        Self {
            storage,
            inner: RwLock::new(StoreInner { state, revision }),
            commit_order: Mutex::new(()),
            observers: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
        }
    }

    pub fn subscribe(&self, observer: Arc<dyn StoreObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, observer));
        id
    }

    /// Returns `false` when the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = observers.len();
        observers.retain(|(subscription, _)| *subscription != id);
        observers.len() != before
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> HealthState {
        self.read().state.clone()
    }

    /// Number of committed mutations since the store was opened.
    pub fn revision(&self) -> u64 {
        self.read().revision
    }

    pub fn profile(&self) -> UserProfile {
        self.read().state.user_profile.clone()
    }

    pub fn symptoms(&self) -> Vec<Symptom> {
        self.read().state.symptoms.clone()
    }

    pub fn meals(&self) -> Vec<Meal> {
        self.read().state.meals.clone()
    }

    pub fn health_plans(&self) -> Vec<HealthPlan> {
        self.read().state.health_plans.clone()
    }

    pub fn nutrition_plans(&self) -> Vec<NutritionPlan> {
        self.read().state.nutrition_plans.clone()
    }

    pub fn fitness_plans(&self) -> Vec<FitnessPlan> {
        self.read().state.fitness_plans.clone()
    }

    pub fn meal_tolerances(&self) -> Vec<MealTolerance> {
        self.read().state.meal_tolerances.clone()
    }

    pub fn symptom_analyses(&self) -> Vec<SymptomAnalysis> {
        self.read().state.symptom_analyses.clone()
    }

    pub fn food_analyses(&self) -> Vec<FoodAnalysis> {
        self.read().state.food_analyses.clone()
    }

    /// The last `count` symptoms, oldest first.
    pub fn recent_symptoms(&self, count: usize) -> Vec<Symptom> {
        last(&self.read().state.symptoms, count)
    }

    /// The last `count` meals, oldest first.
    pub fn recent_meals(&self, count: usize) -> Vec<Meal> {
        last(&self.read().state.meals, count)
    }

    pub fn symptom(&self, id: Uuid) -> Option<Symptom> {
        find(&self.read().state.symptoms, id)
    }

    pub fn meal(&self, id: Uuid) -> Option<Meal> {
        find(&self.read().state.meals, id)
    }

    pub fn health_plan(&self, id: Uuid) -> Option<HealthPlan> {
        find(&self.read().state.health_plans, id)
    }

    pub fn meal_tolerance(&self, id: Uuid) -> Option<MealTolerance> {
        find(&self.read().state.meal_tolerances, id)
    }

    pub fn nutrition_plan(&self, id: Uuid) -> Option<NutritionPlan> {
        find(&self.read().state.nutrition_plans, id)
    }

    pub fn fitness_plan(&self, id: Uuid) -> Option<FitnessPlan> {
        find(&self.read().state.fitness_plans, id)
    }

    pub fn symptom_analysis(&self, id: Uuid) -> Option<SymptomAnalysis> {
        find(&self.read().state.symptom_analyses, id)
    }

    pub fn food_analysis(&self, id: Uuid) -> Option<FoodAnalysis> {
        find(&self.read().state.food_analyses, id)
    }

    pub fn update_profile(&self, update: UserProfileUpdate) -> Result<(), CoreError> {
        self.commit(Collection::UserProfile, ChangeKind::Updated, |state| {
            state.user_profile.merge(update);
            Mutation::Changed {
                output: (),
                id: None,
            }
        })
    }

    pub fn add_symptom(&self, input: NewSymptom) -> Result<Uuid, CoreError> {
        self.add(Collection::Symptoms, |s| &mut s.symptoms, |id| {
            Symptom::new(id, input)
        })
    }

    pub fn remove_symptom(&self, id: Uuid) -> Result<bool, CoreError> {
        self.remove(Collection::Symptoms, |s| &mut s.symptoms, id)
    }

    pub fn add_meal(&self, input: NewMeal) -> Result<Uuid, CoreError> {
        self.add(Collection::Meals, |s| &mut s.meals, |id| Meal::new(id, input))
    }

    pub fn remove_meal(&self, id: Uuid) -> Result<bool, CoreError> {
        self.remove(Collection::Meals, |s| &mut s.meals, id)
    }

    pub fn add_health_plan(&self, input: NewHealthPlan) -> Result<Uuid, CoreError> {
        self.add(Collection::HealthPlans, |s| &mut s.health_plans, |id| {
            HealthPlan::new(id, input)
        })
    }

    pub fn remove_health_plan(&self, id: Uuid) -> Result<bool, CoreError> {
        self.remove(Collection::HealthPlans, |s| &mut s.health_plans, id)
    }

    pub fn add_nutrition_plan(&self, draft: NutritionPlanDraft) -> Result<Uuid, CoreError> {
        self.add(Collection::NutritionPlans, |s| &mut s.nutrition_plans, |id| {
            NutritionPlan::new(id, draft, Utc::now())
        })
    }

    pub fn remove_nutrition_plan(&self, id: Uuid) -> Result<bool, CoreError> {
        self.remove(Collection::NutritionPlans, |s| &mut s.nutrition_plans, id)
    }

    pub fn add_fitness_plan(&self, draft: FitnessPlanDraft) -> Result<Uuid, CoreError> {
        self.add(Collection::FitnessPlans, |s| &mut s.fitness_plans, |id| {
            FitnessPlan::new(id, draft, Utc::now())
        })
    }

    pub fn remove_fitness_plan(&self, id: Uuid) -> Result<bool, CoreError> {
        self.remove(Collection::FitnessPlans, |s| &mut s.fitness_plans, id)
    }

    pub fn add_meal_tolerance(&self, input: NewMealTolerance) -> Result<Uuid, CoreError> {
        self.add(Collection::MealTolerances, |s| &mut s.meal_tolerances, |id| {
            MealTolerance::new(id, input)
        })
    }

    pub fn remove_meal_tolerance(&self, id: Uuid) -> Result<bool, CoreError> {
        self.remove(Collection::MealTolerances, |s| &mut s.meal_tolerances, id)
    }

    pub fn add_symptom_analysis(&self, draft: SymptomAnalysisDraft) -> Result<Uuid, CoreError> {
        self.add(
            Collection::SymptomAnalyses,
            |s| &mut s.symptom_analyses,
            |id| SymptomAnalysis::new(id, draft, Utc::now()),
        )
    }

    pub fn remove_symptom_analysis(&self, id: Uuid) -> Result<bool, CoreError> {
        self.remove(Collection::SymptomAnalyses, |s| &mut s.symptom_analyses, id)
    }

    pub fn add_food_analysis(&self, draft: FoodAnalysisDraft) -> Result<Uuid, CoreError> {
        self.add(Collection::FoodAnalyses, |s| &mut s.food_analyses, |id| {
            FoodAnalysis::new(id, draft, Utc::now())
        })
    }

    pub fn remove_food_analysis(&self, id: Uuid) -> Result<bool, CoreError> {
        self.remove(Collection::FoodAnalyses, |s| &mut s.food_analyses, id)
    }

    /// Resets all nine collections in one write and one notification.
    pub fn clear(&self) -> Result<(), CoreError> {
        self.commit(Collection::All, ChangeKind::Cleared, |state| {
            *state = HealthState::default();
            Mutation::Changed {
                output: (),
                id: None,
            }
        })
    }

    fn add<E, F>(
        &self,
        collection: Collection,
        select: fn(&mut HealthState) -> &mut Vec<E>,
        build: F,
    ) -> Result<Uuid, CoreError>
    where
        E: Identified,
        F: FnOnce(Uuid) -> E,
    {
        self.commit(collection, ChangeKind::Added, |state| {
            let items = select(state);
            let id = fresh_id(items);
            items.push(build(id));
            Mutation::Changed {
                output: id,
                id: Some(id),
            }
        })
    }

    /// `Ok(false)` when no entity had `id`; nothing is written then.
    fn remove<E: Identified>(
        &self,
        collection: Collection,
        select: fn(&mut HealthState) -> &mut Vec<E>,
        id: Uuid,
    ) -> Result<bool, CoreError> {
        self.commit(collection, ChangeKind::Removed, |state| {
            let items = select(state);
            let before = items.len();
            items.retain(|item| item.id() != id);
            if items.len() == before {
                Mutation::Unchanged(false)
            } else {
                Mutation::Changed {
                    output: true,
                    id: Some(id),
                }
            }
        })
    }

    fn commit<T, F>(&self, collection: Collection, kind: ChangeKind, mutation: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut HealthState) -> Mutation<T>,
    {
        let _ordering = self
            .commit_order
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let (output, change) = {
            let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
            let mut next = inner.state.clone();

            let (output, id) = match mutation(&mut next) {
                Mutation::Unchanged(output) => return Ok(output),
                Mutation::Changed { output, id } => (output, id),
            };

            let document = HealthDocument {
                state: next,
                revision: inner.revision + 1,
            };
            save_document(&self.storage, HEALTH_STORAGE_KEY, HEALTH_STORE_VERSION, &document)
                .inspect_err(|e| {
                    error!(?collection, ?kind, "Failed to persist health store: {}", e)
                })?;

            inner.state = document.state;
            inner.revision = document.revision;

            let change = StoreChange {
                revision: inner.revision,
                collection,
                kind,
                id,
            };
            (output, change)
        };

        debug!(
            revision = change.revision,
            collection = ?change.collection,
            kind = ?change.kind,
            "health store committed"
        );
        self.notify(&change);

        Ok(output)
    }

    fn notify(&self, change: &StoreChange) {
        let observers: Vec<Arc<dyn StoreObserver>> = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        for observer in observers {
            observer.on_change(change);
        }
    }
}

fn fresh_id<E: Identified>(items: &[E]) -> Uuid {
    loop {
        let id = generate_uuid_v7();
        if !items.iter().any(|item| item.id() == id) {
            return id;
        }
    }
}

fn last<E: Clone>(items: &[E], count: usize) -> Vec<E> {
    items[items.len().saturating_sub(count)..].to_vec()
}

fn find<E: Identified + Clone>(items: &[E], id: Uuid) -> Option<E> {
    items.iter().find(|item| item.id() == id).cloned()
}
