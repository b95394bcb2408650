//! Amazon MemoryDB (`memorydb`, AWS JSON 1.1, 2021-01-01).

use super::{Member, Operation, Paginator, Protocol, ServiceModel};

pub static SERVICE: ServiceModel = ServiceModel {
    name: "MemoryDB",
    endpoint_prefix: "memory-db",
    signing_name: "memorydb",
    api_version: "2021-01-01",
    protocol: Protocol::AwsJson1_1,
    target_prefix: Some("AmazonMemoryDB"),
    env_suffix: "MEMORYDB",
    operations: &[
        &BATCH_UPDATE_CLUSTER,
        &COPY_SNAPSHOT,
        &CREATE_ACL,
        &CREATE_CLUSTER,
        &CREATE_PARAMETER_GROUP,
        &CREATE_SNAPSHOT,
        &CREATE_SUBNET_GROUP,
        &CREATE_USER,
        &DELETE_ACL,
        &DELETE_CLUSTER,
        &DELETE_PARAMETER_GROUP,
        &DELETE_SNAPSHOT,
        &DELETE_SUBNET_GROUP,
        &DELETE_USER,
        &DESCRIBE_ACLS,
        &DESCRIBE_CLUSTERS,
        &DESCRIBE_ENGINE_VERSIONS,
        &DESCRIBE_EVENTS,
        &DESCRIBE_PARAMETER_GROUPS,
        &DESCRIBE_PARAMETERS,
        &DESCRIBE_SNAPSHOTS,
        &DESCRIBE_SUBNET_GROUPS,
        &DESCRIBE_USERS,
        &FAILOVER_SHARD,
        &LIST_TAGS,
        &TAG_RESOURCE,
        &UNTAG_RESOURCE,
        &UPDATE_CLUSTER,
        &UPDATE_USER,
    ],
};

const PAGES: Paginator = Paginator::pascal_next_token();

pub const BATCH_UPDATE_CLUSTER: Operation = rpc!(
    "BatchUpdateCluster",
    [
        Member::body("ClusterNames").required(),
        Member::body("ServiceUpdate"),
    ]
);

pub const COPY_SNAPSHOT: Operation = rpc!(
    "CopySnapshot",
    [
        Member::body("SourceSnapshotName").required(),
        Member::body("TargetSnapshotName").required(),
        Member::body("TargetBucket"),
        Member::body("KmsKeyId"),
        Member::body("Tags"),
    ]
);

pub const CREATE_ACL: Operation = rpc!(
    "CreateACL",
    [
        Member::body("ACLName").required(),
        Member::body("UserNames"),
        Member::body("Tags"),
    ]
);

pub const CREATE_CLUSTER: Operation = rpc!(
    "CreateCluster",
    [
        Member::body("ClusterName").required(),
        Member::body("NodeType").required(),
        Member::body("ParameterGroupName"),
        Member::body("Description"),
        Member::body("NumShards"),
        Member::body("NumReplicasPerShard"),
        Member::body("SubnetGroupName"),
        Member::body("SecurityGroupIds"),
        Member::body("MaintenanceWindow"),
        Member::body("Port"),
        Member::body("SnsTopicArn"),
        Member::body("TLSEnabled"),
        Member::body("KmsKeyId"),
        Member::body("SnapshotArns"),
        Member::body("SnapshotName"),
        Member::body("SnapshotRetentionLimit"),
        Member::body("Tags"),
        Member::body("SnapshotWindow"),
        Member::body("ACLName").required(),
        Member::body("EngineVersion"),
        Member::body("AutoMinorVersionUpgrade"),
        Member::body("DataTiering"),
    ]
);

pub const CREATE_PARAMETER_GROUP: Operation = rpc!(
    "CreateParameterGroup",
    [
        Member::body("ParameterGroupName").required(),
        Member::body("Family").required(),
        Member::body("Description"),
        Member::body("Tags"),
    ]
);

pub const CREATE_SNAPSHOT: Operation = rpc!(
    "CreateSnapshot",
    [
        Member::body("ClusterName").required(),
        Member::body("SnapshotName").required(),
        Member::body("KmsKeyId"),
        Member::body("Tags"),
    ]
);

pub const CREATE_SUBNET_GROUP: Operation = rpc!(
    "CreateSubnetGroup",
    [
        Member::body("SubnetGroupName").required(),
        Member::body("Description"),
        Member::body("SubnetIds").required(),
        Member::body("Tags"),
    ]
);

pub const CREATE_USER: Operation = rpc!(
    "CreateUser",
    [
        Member::body("UserName").required(),
        Member::body("AuthenticationMode").required(),
        Member::body("AccessString").required(),
        Member::body("Tags"),
    ]
);

pub const DELETE_ACL: Operation = rpc!("DeleteACL", [Member::body("ACLName").required()]);

pub const DELETE_CLUSTER: Operation = rpc!(
    "DeleteCluster",
    [
        Member::body("ClusterName").required(),
        Member::body("FinalSnapshotName"),
    ]
);

pub const DELETE_PARAMETER_GROUP: Operation = rpc!(
    "DeleteParameterGroup",
    [Member::body("ParameterGroupName").required()]
);

pub const DELETE_SNAPSHOT: Operation =
    rpc!("DeleteSnapshot", [Member::body("SnapshotName").required()]);

pub const DELETE_SUBNET_GROUP: Operation = rpc!(
    "DeleteSubnetGroup",
    [Member::body("SubnetGroupName").required()]
);

pub const DELETE_USER: Operation = rpc!("DeleteUser", [Member::body("UserName").required()]);

pub const DESCRIBE_ACLS: Operation = rpc!(
    "DescribeACLs",
    [
        Member::body("ACLName"),
        Member::body("MaxResults"),
        Member::body("NextToken"),
    ],
    PAGES
);

pub const DESCRIBE_CLUSTERS: Operation = rpc!(
    "DescribeClusters",
    [
        Member::body("ClusterName"),
        Member::body("MaxResults"),
        Member::body("NextToken"),
        Member::body("ShowShardDetails"),
    ],
    PAGES
);

pub const DESCRIBE_ENGINE_VERSIONS: Operation = rpc!(
    "DescribeEngineVersions",
    [
        Member::body("EngineVersion"),
        Member::body("ParameterGroupFamily"),
        Member::body("MaxResults"),
        Member::body("NextToken"),
        Member::body("DefaultOnly"),
    ],
    PAGES
);

pub const DESCRIBE_EVENTS: Operation = rpc!(
    "DescribeEvents",
    [
        Member::body("SourceName"),
        Member::body("SourceType"),
        Member::body("StartTime"),
        Member::body("EndTime"),
        Member::body("Duration"),
        Member::body("MaxResults"),
        Member::body("NextToken"),
    ],
    PAGES
);

pub const DESCRIBE_PARAMETER_GROUPS: Operation = rpc!(
    "DescribeParameterGroups",
    [
        Member::body("ParameterGroupName"),
        Member::body("MaxResults"),
        Member::body("NextToken"),
    ],
    PAGES
);

pub const DESCRIBE_PARAMETERS: Operation = rpc!(
    "DescribeParameters",
    [
        Member::body("ParameterGroupName").required(),
        Member::body("MaxResults"),
        Member::body("NextToken"),
    ],
    PAGES
);

pub const DESCRIBE_SNAPSHOTS: Operation = rpc!(
    "DescribeSnapshots",
    [
        Member::body("ClusterName"),
        Member::body("SnapshotName"),
        Member::body("Source"),
        Member::body("NextToken"),
        Member::body("MaxResults"),
        Member::body("ShowDetail"),
    ],
    PAGES
);

pub const DESCRIBE_SUBNET_GROUPS: Operation = rpc!(
    "DescribeSubnetGroups",
    [
        Member::body("SubnetGroupName"),
        Member::body("MaxResults"),
        Member::body("NextToken"),
    ],
    PAGES
);

pub const DESCRIBE_USERS: Operation = rpc!(
    "DescribeUsers",
    [
        Member::body("UserName"),
        Member::body("Filters"),
        Member::body("MaxResults"),
        Member::body("NextToken"),
    ],
    PAGES
);

pub const FAILOVER_SHARD: Operation = rpc!(
    "FailoverShard",
    [
        Member::body("ClusterName").required(),
        Member::body("ShardName").required(),
    ]
);

pub const LIST_TAGS: Operation = rpc!("ListTags", [Member::body("ResourceArn").required()]);

pub const TAG_RESOURCE: Operation = rpc!(
    "TagResource",
    [
        Member::body("ResourceArn").required(),
        Member::body("Tags").required(),
    ]
);

pub const UNTAG_RESOURCE: Operation = rpc!(
    "UntagResource",
    [
        Member::body("ResourceArn").required(),
        Member::body("TagKeys").required(),
    ]
);

pub const UPDATE_CLUSTER: Operation = rpc!(
    "UpdateCluster",
    [
        Member::body("ClusterName").required(),
        Member::body("Description"),
        Member::body("SecurityGroupIds"),
        Member::body("MaintenanceWindow"),
        Member::body("SnsTopicArn"),
        Member::body("SnsTopicStatus"),
        Member::body("ParameterGroupName"),
        Member::body("SnapshotWindow"),
        Member::body("SnapshotRetentionLimit"),
        Member::body("NodeType"),
        Member::body("EngineVersion"),
        Member::body("ReplicaConfiguration"),
        Member::body("ShardConfiguration"),
        Member::body("ACLName"),
    ]
);

pub const UPDATE_USER: Operation = rpc!(
    "UpdateUser",
    [
        Member::body("UserName").required(),
        Member::body("AuthenticationMode"),
        Member::body("AccessString"),
    ]
);
