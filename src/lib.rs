// Wallet service library
// 지갑 서비스 라이브러리 (바이너리와 통합 테스트에서 공유)
pub mod domains;
pub mod routes;
pub mod shared;
pub mod openapi;
