//! アプリケーション層
//!
//! レジストリに対する各操作をユースケースとして提供する。
//! ストアは引数として受け取り、暗黙のグローバル状態は持たない。

pub mod use_cases;
