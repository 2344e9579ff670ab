use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let conn = manager.get_connection();

        let sql = match backend {
            sea_orm::DatabaseBackend::Postgres => {
                r#"
CREATE TABLE IF NOT EXISTS user_gui_props (
    user_id BIGINT PRIMARY KEY NOT NULL,
    lang VARCHAR(15),
    layout VARCHAR(100)
);

CREATE TABLE IF NOT EXISTS admin (
    admin_id BIGINT PRIMARY KEY NOT NULL,
    customer_id VARCHAR(200),
    fname VARCHAR(200),
    lname VARCHAR(200),
    firm VARCHAR(200),
    zip VARCHAR(10),
    city VARCHAR(200),
    state VARCHAR(200),
    country VARCHAR(200),
    email VARCHAR(200),
    phone VARCHAR(200),
    fax VARCHAR(200),
    street1 VARCHAR(200),
    street2 VARCHAR(200)
);

CREATE TABLE IF NOT EXISTS domain (
    domain_id BIGSERIAL PRIMARY KEY,
    domain_name VARCHAR(200) NOT NULL,
    domain_admin_id BIGINT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_domain_admin ON domain(domain_admin_id);
                "#
            }
            sea_orm::DatabaseBackend::MySql => {
                r#"
CREATE TABLE IF NOT EXISTS user_gui_props (
    user_id BIGINT PRIMARY KEY NOT NULL,
    lang VARCHAR(15),
    layout VARCHAR(100)
);

CREATE TABLE IF NOT EXISTS admin (
    admin_id BIGINT PRIMARY KEY NOT NULL,
    customer_id VARCHAR(200),
    fname VARCHAR(200),
    lname VARCHAR(200),
    firm VARCHAR(200),
    zip VARCHAR(10),
    city VARCHAR(200),
    state VARCHAR(200),
    country VARCHAR(200),
    email VARCHAR(200),
    phone VARCHAR(200),
    fax VARCHAR(200),
    street1 VARCHAR(200),
    street2 VARCHAR(200)
);

CREATE TABLE IF NOT EXISTS domain (
    domain_id BIGINT PRIMARY KEY AUTO_INCREMENT,
    domain_name VARCHAR(200) NOT NULL,
    domain_admin_id BIGINT NOT NULL,
    KEY idx_domain_admin (domain_admin_id)
);
                "#
            }
            sea_orm::DatabaseBackend::Sqlite => {
                r#"
CREATE TABLE IF NOT EXISTS user_gui_props (
    user_id INTEGER PRIMARY KEY NOT NULL,
    lang TEXT,
    layout TEXT
);

CREATE TABLE IF NOT EXISTS admin (
    admin_id INTEGER PRIMARY KEY NOT NULL,
    customer_id TEXT,
    fname TEXT,
    lname TEXT,
    firm TEXT,
    zip TEXT,
    city TEXT,
    state TEXT,
    country TEXT,
    email TEXT,
    phone TEXT,
    fax TEXT,
    street1 TEXT,
    street2 TEXT
);

CREATE TABLE IF NOT EXISTS domain (
    domain_id INTEGER PRIMARY KEY AUTOINCREMENT,
    domain_name TEXT NOT NULL,
    domain_admin_id INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_domain_admin ON domain(domain_admin_id);
                "#
            }
        };

        conn.execute_unprepared(sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        let sql = r#"
DROP TABLE IF EXISTS domain;
DROP TABLE IF EXISTS admin;
DROP TABLE IF EXISTS user_gui_props;
        "#;
        conn.execute_unprepared(sql).await?;
        Ok(())
    }
}
