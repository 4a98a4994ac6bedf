// src/domain/timestamp.rs

use crate::types::datetime::normalize_to_utc;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use sea_orm::ActiveValue;

/// 保存時にタイムスタンプを刻むエンティティ
///
/// 各 `ActiveModel` が実装し、`before_save` から [`stamp`] を呼ぶ。
/// 作成日時は挿入時のみ書き込み、更新時は呼び出し側の値を捨てる。
pub trait Timestamped {
    fn stamp_created(&mut self, now: DateTime<Utc>);
    fn stamp_updated(&mut self, now: DateTime<Utc>);
    /// 更新時に作成日時を書き込み対象から外す
    fn keep_created(&mut self);
    /// zimmet 系の日付を UTC に揃える
    fn normalize_dates(&mut self) {}
}

pub fn stamp<T: Timestamped>(mut model: T, insert: bool) -> T {
    let now = Utc::now();
    if insert {
        model.stamp_created(now);
    } else {
        model.keep_created();
    }
    model.stamp_updated(now);
    model.normalize_dates();
    model
}

/// Set 済みの日時を UTC オフセットへ揃える
pub fn normalize_set(value: &mut ActiveValue<DateTimeWithTimeZone>) {
    if let ActiveValue::Set(v) = value {
        *v = normalize_to_utc(*v);
    }
}

pub fn normalize_set_optional(value: &mut ActiveValue<Option<DateTimeWithTimeZone>>) {
    if let ActiveValue::Set(Some(v)) = value {
        *v = normalize_to_utc(*v);
    }
}

/// `created_at` / `updated_at` を持つ標準的なエンティティ向け
#[macro_export]
macro_rules! impl_timestamped {
    ($active:ty) => {
        impl $crate::domain::timestamp::Timestamped for $active {
            fn stamp_created(&mut self, now: ::chrono::DateTime<::chrono::Utc>) {
                self.created_at = ::sea_orm::ActiveValue::Set(now);
            }

            fn stamp_updated(&mut self, now: ::chrono::DateTime<::chrono::Utc>) {
                self.updated_at = ::sea_orm::ActiveValue::Set(now);
            }

            fn keep_created(&mut self) {
                self.created_at = ::sea_orm::ActiveValue::NotSet;
            }
        }
    };
}
