// src/trace.rs
//
// ブラウザコンソールへのトレース出力
//
// wasm32 ターゲットで対応する feature が有効な場合のみ console.log に書き出す。
// それ以外の構成では何も生成しない（引数も評価されない）。

/// 正規化・パース失敗のトレース（feature = "trace-normalize"）
macro_rules! trace_normalize {
    ($($arg:tt)*) => {{
        #[cfg(all(target_arch = "wasm32", feature = "trace-normalize"))]
        web_sys::console::log_1(&format!($($arg)*).into());
    }};
}

/// 四則演算のトレース（feature = "trace-arith"）
macro_rules! trace_arith {
    ($($arg:tt)*) => {{
        #[cfg(all(target_arch = "wasm32", feature = "trace-arith"))]
        web_sys::console::log_1(&format!($($arg)*).into());
    }};
}
