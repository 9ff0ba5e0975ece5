// ページネーションの範囲を指定するための設定値を格納する型
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub limit: i64,
    pub offset: i64,
}
